/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("wheretui-debug.log");
    path
}

/// Get fallback data path when the platform has no data directory
pub fn get_data_fallback_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("wheretui-data");
    path
}
