//! Directory Model
//!
//! The full country list. Written once per session, read-only afterwards.

use crate::api::Country;

#[derive(Clone, Debug, Default)]
pub struct DirectoryModel {
    pub countries: Vec<Country>,
    /// Whether the startup fetch has completed (successfully or not)
    pub settled: bool,
    /// Whether `countries` has been written
    pub loaded: bool,
}

impl DirectoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched list. Returns false (and changes nothing) if already set.
    pub fn set_once(&mut self, countries: Vec<Country>) -> bool {
        if self.loaded {
            return false;
        }
        self.countries = countries;
        self.loaded = true;
        self.settled = true;
        true
    }

    /// Record a failed load; the directory stays empty
    pub fn mark_failed(&mut self) {
        self.settled = true;
    }

    /// First record whose common name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name.common == name)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
