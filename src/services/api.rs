use futures_util::future::try_join_all;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Country, CountrySource, FetchError};
use crate::logic::borders::border_display_name;

/// Results delivered from background tasks to the event loop
#[derive(Debug)]
pub enum ApiResponse {
    /// One-shot directory load finished
    DirectoryLoaded {
        result: Result<Vec<Country>, FetchError>,
    },

    /// Border fan-out for the detail view mounted as `generation`
    BordersResolved {
        generation: u64,
        result: Result<Vec<String>, FetchError>,
    },

    /// Flag image for the detail view mounted as `generation`
    FlagLoaded {
        generation: u64,
        result: Result<image::DynamicImage, String>,
    },
}

/// Spawn the startup directory fetch. No retry: a failure is reported once.
pub fn spawn_directory_load<S: CountrySource>(
    source: S,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("fetching country directory");
        let result = source.fetch_all().await;

        match &result {
            Ok(countries) => tracing::info!(count = countries.len(), "country directory loaded"),
            Err(e) => tracing::warn!("Failed to fetch country directory: {e}"),
        }

        let _ = response_tx.send(ApiResponse::DirectoryLoaded { result });
    })
}

/// Translate border codes into display names.
///
/// All lookups are issued concurrently. Names come back in `codes` order no
/// matter which lookup finishes first. Any failed lookup fails the whole batch.
pub async fn resolve_border_names<S: CountrySource>(
    source: &S,
    codes: &[String],
) -> Result<Vec<String>, FetchError> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }

    let lookups = codes.iter().map(|code| source.fetch_by_code(code));
    let results = try_join_all(lookups).await?;

    Ok(results
        .iter()
        .map(|lookup| border_display_name(lookup.as_ref()))
        .collect())
}

pub fn spawn_border_resolution<S: CountrySource>(
    source: S,
    codes: Vec<String>,
    generation: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(generation, ?codes, "resolving border names");
        let result = resolve_border_names(&source, &codes).await;

        if let Err(e) = &result {
            tracing::warn!(generation, "Error fetching border countries: {e}");
        }

        let _ = response_tx.send(ApiResponse::BordersResolved { generation, result });
    })
}

pub fn spawn_flag_load<S: CountrySource>(
    source: S,
    url: String,
    generation: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = load_flag(&source, &url).await;

        if let Err(e) = &result {
            tracing::debug!(generation, url = %url, "Flag image unavailable: {e}");
        }

        let _ = response_tx.send(ApiResponse::FlagLoaded { generation, result });
    })
}

async fn load_flag<S: CountrySource>(source: &S, url: &str) -> Result<image::DynamicImage, String> {
    let bytes = source.fetch_flag(url).await.map_err(|e| e.to_string())?;

    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| format!("Task error: {e}"))?
        .map_err(|e| format!("Decode error: {e}"))
}

/// Background tasks owned by one mounted view.
///
/// Dropping the owner aborts whatever is still in flight, so nothing outlives
/// the view that started it.
#[derive(Debug, Default)]
pub struct ViewTasks {
    handles: Vec<JoinHandle<()>>,
}

impl ViewTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    pub fn in_flight(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for ViewTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}
