//! Event Handlers
//!
//! - api: Results from background fetch tasks
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
