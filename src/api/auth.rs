use tracing::info;

use super::{ApiClient, RequestError};
use crate::models::users::{AuthResponse, LoginRequest, RegisterRequest};

/// POST /auth/register creates the account and its role profile.
pub async fn register(
    api: &ApiClient,
    input: &RegisterRequest,
) -> Result<AuthResponse, RequestError> {
    let response: AuthResponse = api.post_flat("/auth/register", input).await?;
    info!(role = %input.role, "Registered new account");
    Ok(response)
}

/// POST /auth/login
pub async fn login(api: &ApiClient, input: &LoginRequest) -> Result<AuthResponse, RequestError> {
    let response: AuthResponse = api.post_flat("/auth/login", input).await?;
    info!(role = ?response.user.role, "Logged in");
    Ok(response)
}
