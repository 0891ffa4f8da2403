use thiserror::Error;

/// Failure of a single API round trip, or of the local preconditions for one.
///
/// Display text is what a view shows inline, so every variant renders as a
/// sentence a user can act on.
#[derive(Debug, Error)]
pub enum RequestError {
    /// No response arrived: connection refused, DNS, timeout, reset.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but its body was not the JSON we expected.
    #[error("{0}")]
    Protocol(String),

    /// The server answered with a non-2xx status or `success: false`.
    #[error("{message}")]
    Failure { status: u16, message: String },

    /// A required local identifier (token, profile id) was missing, so the
    /// request was never sent.
    #[error("{0}")]
    Precondition(String),
}

impl RequestError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// HTTP status for server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Failure { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
