use crate::models::users::Roles;

/// Coarse per-session lifecycle. There is no renewal transition; an expired
/// token is only discovered when the server rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Roles),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn(Roles),
    SignedUp(Roles),
    LoggedOut,
}

impl SessionState {
    pub fn transition(self, event: SessionEvent) -> Self {
        match (self, event) {
            (_, SessionEvent::LoggedOut) => SessionState::Anonymous,
            (_, SessionEvent::LoggedIn(role) | SessionEvent::SignedUp(role)) => {
                SessionState::Authenticated(role)
            }
        }
    }

    pub fn role(&self) -> Option<Roles> {
        match self {
            SessionState::Authenticated(role) => Some(*role),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}
