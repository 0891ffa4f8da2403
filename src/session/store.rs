use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::backend::{SessionBackend, SessionError};
use super::guard::Route;
use super::state::SessionState;
use crate::config::SessionBackendKind;
use crate::models::users::{AuthResponse, Roles, SessionUser};

/// Session key names
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const FREELANCER_ONBOARDING: &str = "freelancerOnboardingData";
    pub const CLIENT_ONBOARDING: &str = "clientOnboardingData";

    /// Everything a logout must remove.
    pub const ALL: [&str; 4] = [TOKEN, USER, FREELANCER_ONBOARDING, CLIENT_ONBOARDING];
}

/// Which onboarding form a draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Freelancer,
    Client,
}

impl DraftKind {
    fn key(self) -> &'static str {
        match self {
            DraftKind::Freelancer => keys::FREELANCER_ONBOARDING,
            DraftKind::Client => keys::CLIENT_ONBOARDING,
        }
    }
}

/// What the caller must do once a logout has cleared the store: drop every
/// piece of in-memory state by reloading from `redirect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub redirect: Route,
    pub reload: bool,
}

/// Persisted credential + identity for the current actor.
///
/// Injected into views instead of being read as ambient global state.
#[derive(Clone)]
pub struct SessionStore {
    backend: SessionBackend,
}

impl SessionStore {
    pub fn new(backend: SessionBackend) -> Self {
        Self { backend }
    }

    pub async fn open(kind: &SessionBackendKind) -> Result<Self, SessionError> {
        Ok(Self::new(SessionBackend::open(kind).await?))
    }

    /// Load whatever a previous run left behind and report where we stand.
    pub async fn init(&self) -> Result<SessionState, SessionError> {
        let state = self.state().await?;
        match state {
            SessionState::Authenticated(role) => info!(%role, "Restored session"),
            SessionState::Anonymous => info!("No active session"),
        }
        Ok(state)
    }

    /// Read a key. A value that no longer decodes as `T` is treated as absent.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let Some(value) = self.backend.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed session value");
                Ok(None)
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        self.backend.set(key, serde_json::to_value(value)?).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.backend.remove_all(&[key]).await
    }

    pub async fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .get::<String>(keys::TOKEN)
            .await?
            .filter(|t| !t.is_empty()))
    }

    /// The stored user record. Only a JSON object counts; every field of
    /// `SessionUser` is optional, so anything else would decode to garbage.
    pub async fn user(&self) -> Result<Option<SessionUser>, SessionError> {
        match self.backend.get(keys::USER).await? {
            Some(value) if !value.is_object() => {
                warn!(key = keys::USER, "Ignoring malformed session value");
                Ok(None)
            }
            Some(_) => self.get(keys::USER).await,
            None => Ok(None),
        }
    }

    /// Authenticated only with both a token and a user record naming a role.
    pub async fn state(&self) -> Result<SessionState, SessionError> {
        if self.token().await?.is_none() {
            return Ok(SessionState::Anonymous);
        }
        Ok(match self.user().await?.and_then(|u| u.role) {
            Some(role) => SessionState::Authenticated(role),
            None => SessionState::Anonymous,
        })
    }

    /// Persist the result of a successful login or sign-up.
    ///
    /// `entry_role` is the role of the page the user came through; it fills in
    /// the user's role when the server response leaves it out.
    pub async fn establish(
        &self,
        auth: &AuthResponse,
        entry_role: Roles,
    ) -> Result<SessionState, SessionError> {
        let mut user = auth.user.clone();
        let role = *user.role.get_or_insert(entry_role);

        self.set(keys::TOKEN, &auth.token).await?;
        self.set(keys::USER, &user).await?;
        info!(%role, profile_id = ?user.profile_id, "Session established");
        Ok(SessionState::Authenticated(role))
    }

    pub async fn save_draft<T: Serialize>(
        &self,
        kind: DraftKind,
        draft: &T,
    ) -> Result<(), SessionError> {
        self.set(kind.key(), draft).await
    }

    pub async fn load_draft<T: DeserializeOwned>(
        &self,
        kind: DraftKind,
    ) -> Result<Option<T>, SessionError> {
        self.get(kind.key()).await
    }

    pub async fn discard_draft(&self, kind: DraftKind) -> Result<(), SessionError> {
        self.remove(kind.key()).await
    }

    /// Logout: token, user and any onboarding drafts go in one step.
    pub async fn clear(&self) -> Result<LogoutOutcome, SessionError> {
        self.backend.remove_all(&keys::ALL).await?;
        info!("Session cleared");
        Ok(LogoutOutcome {
            redirect: Route::Root,
            reload: true,
        })
    }
}
