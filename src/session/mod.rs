pub mod backend;
pub mod guard;
pub mod profile;
pub mod state;
pub mod store;

pub use backend::{SessionBackend, SessionError};
pub use guard::{Access, Route, guard};
pub use profile::ProfileContext;
pub use state::{SessionEvent, SessionState};
pub use store::{DraftKind, LogoutOutcome, SessionStore};
