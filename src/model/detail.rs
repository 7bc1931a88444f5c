//! Detail Model
//!
//! State that exists only while a detail view is mounted. A new generation is
//! started on every mount; responses tagged with another generation are stale.

use super::types::LoadStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailModel {
    pub generation: u64,

    /// Route parameter this view was mounted for
    pub country_name: String,

    /// Resolved border names, in border-code order
    pub border_names: Vec<String>,

    pub border_status: LoadStatus,

    pub flag_status: LoadStatus,
}

impl DetailModel {
    pub fn new(generation: u64, country_name: String) -> Self {
        Self {
            generation,
            country_name,
            border_names: Vec::new(),
            border_status: LoadStatus::Idle,
            flag_status: LoadStatus::Idle,
        }
    }
}
