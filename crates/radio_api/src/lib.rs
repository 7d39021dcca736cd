//! Radio schedule HTTP API
//!
//! This library serves the schedule page and the programs proxy endpoint.

mod page;
mod programs;
mod view;

use axum::{Router, routing::get};
use radio_engine::{FailurePolicy, HttpProgramSource, ProgramSource};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use crate::programs::ErrorResponse;
pub use crate::view::{PAGE_TITLE, TrustedHtml, render_page};

/// Shared, read-only state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream programs API, relayed by the proxy endpoint.
    pub upstream: HttpProgramSource,
    /// Where the page gets its schedule from.
    pub source: Arc<dyn ProgramSource>,
    pub policy: FailurePolicy,
    pub default_station: String,
    /// Prefix every route is mounted under; empty for the root.
    pub base_path: String,
}

impl AppState {
    pub fn new(
        upstream: HttpProgramSource,
        policy: FailurePolicy,
        default_station: impl Into<String>,
    ) -> Self {
        AppState {
            source: Arc::new(upstream.clone()),
            upstream,
            policy,
            default_station: default_station.into(),
            base_path: String::new(),
        }
    }

    pub fn with_source(mut self, source: Arc<dyn ProgramSource>) -> Self {
        self.source = source;
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// First `stationId` of a query string; later repeats are ignored.
pub(crate) fn station_id_param(params: &[(String, String)]) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| key == "stationId")
        .map(|(_, value)| value.clone())
}

/// Create the application router with all endpoints
pub fn create_app(app_state: AppState) -> Router {
    let base_path = app_state.base_path.clone();
    let mounted = |path: &str| format!("{base_path}{path}");

    // The page answers both with and without a trailing slash under a base path
    let mut app = Router::new()
        .route(&mounted("/"), get(page::schedule_page))
        .route(&mounted("/api/programs"), get(programs::get_programs))
        .route(&mounted("/health"), get(health_check));
    if !base_path.is_empty() {
        app = app.route(&base_path, get(page::schedule_page));
    }

    app.with_state(Arc::new(app_state))
        .layer(TraceLayer::new_for_http())
}
