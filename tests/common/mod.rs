//! Shared in-memory country source for integration tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use wheretui::api::{Country, CountryName, CountrySource, FetchError};
use wheretui::config::Config;
use wheretui::handlers::handle_api_response;
use wheretui::preferences::ThemePreference;
use wheretui::App;

/// Build a minimal record
pub fn country(name: &str, region: &str, cca3: &str, borders: &[&str]) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: name.to_string(),
            ..Default::default()
        },
        region: region.to_string(),
        cca3: cca3.to_string(),
        borders: if borders.is_empty() {
            None
        } else {
            Some(borders.iter().map(|b| b.to_string()).collect())
        },
        ..Default::default()
    }
}

/// Country source backed by fixed data, with per-code delays and failures
#[derive(Clone, Default)]
pub struct FakeSource {
    directory: Arc<Vec<Country>>,
    fail_directory: bool,
    by_code: Arc<HashMap<String, Country>>,
    delays_ms: Arc<HashMap<String, u64>>,
    failing_codes: Arc<HashSet<String>>,
}

impl FakeSource {
    pub fn new(directory: Vec<Country>) -> Self {
        let by_code = directory
            .iter()
            .map(|c| (c.cca3.clone(), c.clone()))
            .collect();
        Self {
            directory: Arc::new(directory),
            by_code: Arc::new(by_code),
            ..Default::default()
        }
    }

    pub fn failing_directory() -> Self {
        Self {
            fail_directory: true,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, code: &str, ms: u64) -> Self {
        Arc::make_mut(&mut self.delays_ms).insert(code.to_string(), ms);
        self
    }

    pub fn with_failure(mut self, code: &str) -> Self {
        Arc::make_mut(&mut self.failing_codes).insert(code.to_string());
        self
    }
}

fn server_error(url: String) -> FetchError {
    FetchError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        url,
    }
}

impl CountrySource for FakeSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        if self.fail_directory {
            return Err(server_error("/all".to_string()));
        }
        Ok(self.directory.as_ref().clone())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Option<Country>, FetchError> {
        if let Some(ms) = self.delays_ms.get(code) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing_codes.contains(code) {
            return Err(server_error(format!("/alpha/{code}")));
        }
        Ok(self.by_code.get(code).cloned())
    }

    async fn fetch_flag(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Err(server_error(url.to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        flag_images: false,
        ..Config::default()
    }
}

/// App over `source` with the directory load already applied
pub async fn loaded_app(source: FakeSource) -> App<FakeSource> {
    let mut app = App::new(&test_config(), source, ThemePreference::ephemeral(), None);
    next_response(&mut app).await;
    app
}

/// Wait for one background result and apply it
pub async fn next_response(app: &mut App<FakeSource>) {
    let response = tokio::time::timeout(Duration::from_secs(5), app.recv_response())
        .await
        .expect("timed out waiting for a background result")
        .expect("response channel closed");
    handle_api_response(app, response);
}
