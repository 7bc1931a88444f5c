//! Border display names

use crate::api::Country;

/// Shown when a border lookup returns no usable name
pub const UNKNOWN_BORDER: &str = "Unknown";

/// Shown when a country has no resolved border names
pub const NO_BORDERS: &str = "No Border Countries";

/// Display name of a resolved border lookup
pub fn border_display_name(lookup: Option<&Country>) -> String {
    match lookup {
        Some(country) if !country.name.common.is_empty() => country.name.common.clone(),
        _ => UNKNOWN_BORDER.to_string(),
    }
}
