pub mod aggregator;
pub mod api;
pub mod config;
pub mod events;
pub mod models;
pub mod session;
pub mod views;

pub use api::{ApiClient, RequestError};
pub use session::SessionStore;
