//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - borders: Border display-name extraction
//! - details: Derived detail-view fields
//! - formatting: Human-readable values and "N/A" fallbacks
//! - navigation: Selection movement and route paths
//! - search: Region filter and name search over the directory
//! - theme: Light/Dark mode and its stored representation

pub mod borders;
pub mod details;
pub mod formatting;
pub mod navigation;
pub mod search;
pub mod theme;
