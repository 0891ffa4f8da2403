pub mod bus;
pub mod protocol;

pub use bus::{EventBus, Subscription};
pub use protocol::DashboardEvent;
