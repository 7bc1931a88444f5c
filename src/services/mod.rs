//! External Services
//!
//! Background tasks that talk to the upstream country API and report back to
//! the event loop over a channel:
//! - api: Directory load, border fan-out, flag download

pub mod api;

pub use api::{ApiResponse, ViewTasks};
