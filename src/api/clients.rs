use super::{ApiClient, RequestError};
use crate::models::clients::{Client, CreateClient};

/// POST /clients
pub async fn create_client(api: &ApiClient, input: &CreateClient) -> Result<Client, RequestError> {
    api.post("/clients", input).await
}

/// GET /clients
pub async fn get_clients(api: &ApiClient) -> Result<Vec<Client>, RequestError> {
    api.get("/clients", &[]).await
}

/// GET /clients/{id}
pub async fn get_client_by_id(api: &ApiClient, id: &str) -> Result<Client, RequestError> {
    api.get(&format!("/clients/{id}"), &[]).await
}
