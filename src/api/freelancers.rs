use super::{ApiClient, RequestError};
use crate::models::freelancers::{CreateFreelancer, Freelancer, FreelancerFilters, UpdateFreelancer};
use crate::models::matches::FreelancerSuggestions;

/// POST /freelancers
pub async fn create_freelancer(
    api: &ApiClient,
    input: &CreateFreelancer,
) -> Result<Freelancer, RequestError> {
    api.post("/freelancers", input).await
}

/// GET /freelancers
pub async fn get_freelancers(
    api: &ApiClient,
    filters: &FreelancerFilters,
) -> Result<Vec<Freelancer>, RequestError> {
    api.get("/freelancers", &filters.to_query()).await
}

/// GET /freelancers/{id}
pub async fn get_freelancer_by_id(api: &ApiClient, id: &str) -> Result<Freelancer, RequestError> {
    api.get(&format!("/freelancers/{id}"), &[]).await
}

/// GET /freelancers/{id}/suggested-projects: the freelancer plus projects
/// pre-split into learning and paid.
pub async fn get_suggested_projects(
    api: &ApiClient,
    id: &str,
) -> Result<FreelancerSuggestions, RequestError> {
    api.get(&format!("/freelancers/{id}/suggested-projects"), &[])
        .await
}

/// PATCH /freelancers/{id}. Only name, skills, preferred project type and
/// availability can change; `UpdateFreelancer` carries nothing else.
pub async fn update_freelancer(
    api: &ApiClient,
    id: &str,
    input: &UpdateFreelancer,
) -> Result<Freelancer, RequestError> {
    api.patch(&format!("/freelancers/{id}"), input).await
}
