pub mod auth;
pub mod client_dashboard;
pub mod freelancer_dashboard;
pub mod onboarding;

use tracing::warn;

use crate::api::{ApiClient, RequestError};
use crate::session::{SessionError, SessionStore};

/// Inline, dismissable error text shown in place of a panel's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    message: String,
    dismissed: bool,
}

impl ViewError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismissed: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Text to render, or `None` once the user has dismissed it.
    pub fn visible(&self) -> Option<&str> {
        (!self.dismissed).then_some(self.message.as_str())
    }
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<RequestError> for ViewError {
    fn from(e: RequestError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SessionError> for ViewError {
    fn from(e: SessionError) -> Self {
        Self::new(e.to_string())
    }
}

/// What a panel has to show after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loaded(T),
    /// Nothing to show; carries the empty-state text.
    Empty(&'static str),
    Failed(ViewError),
}

impl<T> ViewState<T> {
    pub fn failed(e: impl Into<ViewError>) -> Self {
        ViewState::Failed(e.into())
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn error_mut(&mut self) -> Option<&mut ViewError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// The API client with the session's bearer token attached, when there is
/// one. An unreadable session just means an unauthenticated request.
pub(crate) async fn authorized(api: &ApiClient, session: &SessionStore) -> ApiClient {
    let token = match session.token().await {
        Ok(token) => token,
        Err(e) => {
            warn!(error = %e, "Could not read session token");
            None
        }
    };
    api.clone().with_token(token)
}
