//! Detail view lifecycle
//!
//! Mounting a detail view starts a new generation and its background tasks
//! (border fan-out, flag image). Unmounting aborts them and discards the
//! border names. Results from any other generation are dropped.

use crate::api::{Country, CountrySource, FetchError};
use crate::logic::details::CountryDetails;
use crate::logic::navigation::Route;
use crate::model::{DetailModel, LoadStatus};
use crate::services::api::{spawn_border_resolution, spawn_flag_load};
use crate::App;

impl<S: CountrySource> App<S> {
    /// Record the detail route points at: first exact common-name match
    pub fn current_country(&self) -> Option<&Country> {
        match &self.model.navigation.route {
            Route::Country { name } => self.model.directory.find_by_name(name),
            Route::Home => None,
        }
    }

    /// Display fields of the current detail view; `None` renders "not found"
    pub fn current_details(&self) -> Option<CountryDetails> {
        self.current_country().map(CountryDetails::derive)
    }

    pub(crate) fn enter_detail_view(&mut self, name: String) {
        self.detail_tasks.abort_all();
        self.flag_protocol = None;
        self.model.navigation.detail_scroll = 0;

        self.next_generation += 1;
        let generation = self.next_generation;
        let mut detail = DetailModel::new(generation, name.clone());

        let Some(country) = self.model.directory.find_by_name(&name) else {
            tracing::warn!(name = %name, loaded = self.model.directory.loaded, "country not found in directory");
            self.model.detail = Some(detail);
            return;
        };

        let codes = country.border_codes().to_vec();
        let flag_url = country.flags.png.clone();

        if !codes.is_empty() {
            detail.border_status = LoadStatus::Loading;
            let handle = spawn_border_resolution(
                self.source.clone(),
                codes,
                generation,
                self.api_tx.clone(),
            );
            self.detail_tasks.push(handle);
        }

        if let (true, Some(url)) = (self.flag_images, flag_url) {
            detail.flag_status = LoadStatus::Loading;
            let handle = spawn_flag_load(self.source.clone(), url, generation, self.api_tx.clone());
            self.detail_tasks.push(handle);
        }

        self.model.detail = Some(detail);
    }

    pub(crate) fn leave_detail_view(&mut self) {
        self.detail_tasks.abort_all();
        self.flag_protocol = None;
        self.model.detail = None;
    }

    /// Re-mount the current detail view (e.g. once the directory arrives)
    pub(crate) fn refresh_detail_view(&mut self) {
        if let Route::Country { name } = self.model.navigation.route.clone() {
            self.enter_detail_view(name);
        }
    }

    /// Number of background tasks the mounted view still has running
    pub fn detail_tasks_in_flight(&self) -> usize {
        self.detail_tasks.in_flight()
    }

    fn mounted_detail(&mut self, generation: u64) -> Option<&mut DetailModel> {
        self.model
            .detail
            .as_mut()
            .filter(|detail| detail.generation == generation)
    }

    pub(crate) fn apply_border_result(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, FetchError>,
    ) {
        let Some(detail) = self.mounted_detail(generation) else {
            tracing::debug!(generation, "dropping border names for unmounted view");
            return;
        };

        match result {
            Ok(names) => {
                detail.border_names = names;
                detail.border_status = LoadStatus::Loaded;
            }
            Err(_) => {
                // Whole batch failed: keep whatever was shown before
                detail.border_status = LoadStatus::Failed;
            }
        }
    }

    pub(crate) fn apply_flag_result(
        &mut self,
        generation: u64,
        result: Result<image::DynamicImage, String>,
    ) {
        let Some(detail) = self.mounted_detail(generation) else {
            return;
        };

        match result {
            Ok(img) => {
                detail.flag_status = LoadStatus::Loaded;
                if let Some(picker) = &self.image_picker {
                    self.flag_protocol = Some(picker.new_resize_protocol(img));
                }
            }
            Err(_) => detail.flag_status = LoadStatus::Failed,
        }
    }
}
