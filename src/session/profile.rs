use super::store::SessionStore;
use crate::api::{ApiClient, RequestError};
use crate::models::users::Roles;

/// Shown when a client view has no profile id to scope its queries with.
pub const MISSING_CLIENT_ID: &str = "Client ID not found. Please login again.";
/// Shown when a freelancer view has no profile id to scope its queries with.
pub const MISSING_PROFILE_ID: &str = "Profile ID not found. Please login again.";

/// The identifiers every dashboard query is scoped by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileContext {
    pub profile_id: String,
    pub role: Roles,
    pub name: Option<String>,
    pub token: Option<String>,
}

impl ProfileContext {
    /// Resolve the acting profile for a view that needs `role`.
    ///
    /// A missing or unreadable session, an absent profile id, or a session
    /// for the other role is a precondition failure: the view reports it and
    /// issues no request.
    pub async fn resolve(store: &SessionStore, role: Roles) -> Result<Self, RequestError> {
        let missing = || {
            RequestError::precondition(match role {
                Roles::Client => MISSING_CLIENT_ID,
                Roles::Freelancer => MISSING_PROFILE_ID,
            })
        };

        let user = match store.user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(missing()),
            Err(e) => {
                tracing::warn!(error = %e, "Session unreadable while resolving profile");
                return Err(missing());
            }
        };

        if let Some(actual) = user.role.filter(|r| *r != role) {
            return Err(RequestError::precondition(format!(
                "This page is for {role} accounts, but you are signed in as a {actual}."
            )));
        }

        let profile_id = user.profile_id.ok_or_else(missing)?;
        let token = store.token().await.ok().flatten();

        Ok(Self {
            profile_id,
            role,
            name: user.name,
            token,
        })
    }

    /// An API client carrying this context's bearer token.
    pub fn authorize(&self, api: &ApiClient) -> ApiClient {
        api.clone().with_token(self.token.clone())
    }
}
