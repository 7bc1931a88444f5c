//! Where in the world? TUI Library
//!
//! Country directory browser: region filter, name search, detail view with
//! border countries, and a persisted Light/Dark theme.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod preferences;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
