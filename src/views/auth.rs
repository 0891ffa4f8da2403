use super::ViewError;
use crate::api::{ApiClient, RequestError, auth as auth_api};
use crate::models::users::{LoginRequest, RegisterRequest, Roles};
use crate::session::{LogoutOutcome, Route, SessionStore};

pub const NETWORK_ERROR: &str = "Network error. Please try again.";

fn auth_error(e: RequestError, fallback: &str) -> ViewError {
    match e {
        RequestError::Network(_) => ViewError::new(NETWORK_ERROR),
        RequestError::Failure { message, .. } if !message.is_empty() => ViewError::new(message),
        RequestError::Failure { .. } => ViewError::new(fallback),
        other => other.into(),
    }
}

/// Log in through the `role` entry page and land on that role's dashboard.
pub async fn login(
    api: &ApiClient,
    session: &SessionStore,
    role: Roles,
    email: &str,
    password: &str,
) -> Result<Route, ViewError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let auth = auth_api::login(api, &request)
        .await
        .map_err(|e| auth_error(e, "Login failed"))?;

    let state = session.establish(&auth, role).await?;
    Ok(Route::dashboard_for(state.role().unwrap_or(role)))
}

/// Sign up and continue to that role's onboarding form.
pub async fn signup(
    api: &ApiClient,
    session: &SessionStore,
    request: &RegisterRequest,
) -> Result<Route, ViewError> {
    let auth = auth_api::register(api, request)
        .await
        .map_err(|e| auth_error(e, "Signup failed"))?;

    session.establish(&auth, request.role).await?;
    Ok(match request.role {
        Roles::Freelancer => Route::Onboarding,
        Roles::Client => Route::ClientOnboarding,
    })
}

pub async fn logout(session: &SessionStore) -> Result<LogoutOutcome, ViewError> {
    Ok(session.clear().await?)
}
