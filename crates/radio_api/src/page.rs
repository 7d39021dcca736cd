use axum::{
    extract::{Query, State},
    response::Html,
};
use radio_engine::ScheduleController;
use std::sync::Arc;

use crate::{AppState, station_id_param, view};

/// Render the schedule page for the requested (or default) station.
///
/// Every request mounts a fresh controller, so the selector reloading the page
/// issues exactly one fetch for the newly selected station.
pub async fn schedule_page(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let station_id = station_id_param(&params)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| app_state.default_station.clone());
    tracing::info!("Rendering schedule page for station {}", station_id);

    let controller =
        ScheduleController::new(app_state.source.clone(), app_state.policy, station_id);
    controller.mount().await;

    Html(view::render_page(&controller.snapshot(), &app_state.base_path).into_string())
}
