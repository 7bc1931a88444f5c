//! API Response Handler
//!
//! Applies results from background fetch tasks to the app. Failures are
//! logged by the tasks themselves and never surface beyond empty lists.

use crate::api::CountrySource;
use crate::services::ApiResponse;
use crate::App;

/// Handle a result from a background fetch task
///
/// Response types:
/// - DirectoryLoaded: Startup directory fetch (success fills the directory once)
/// - BordersResolved: Border fan-out for a detail view generation
/// - FlagLoaded: Flag image for a detail view generation
pub fn handle_api_response<S: CountrySource>(app: &mut App<S>, response: ApiResponse) {
    match response {
        ApiResponse::DirectoryLoaded { result } => {
            match result {
                Ok(countries) => {
                    if !app.model.directory.set_once(countries) {
                        tracing::warn!("directory already populated, ignoring second load");
                        return;
                    }
                }
                Err(_) => {
                    app.model.directory.mark_failed();
                    return;
                }
            }

            // Selection starts on the first entry once there is something to show
            if app.model.navigation.selected.is_none() && !app.visible_countries().is_empty() {
                app.model.navigation.selected = Some(0);
            }

            // A detail view opened before the data arrived can resolve now
            if app.model.navigation.in_detail_view() && app.current_country().is_some() {
                app.refresh_detail_view();
            }
        }

        ApiResponse::BordersResolved { generation, result } => {
            app.apply_border_result(generation, result);
        }

        ApiResponse::FlagLoaded { generation, result } => {
            app.apply_flag_result(generation, result);
        }
    }
}
