use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{AppState, station_id_param};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Relay the upstream schedule of a station as-is.
pub async fn get_programs(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some(station_id) = station_id_param(&params).filter(|id| !id.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "stationId is required");
    };

    tracing::info!("Proxying programs for station {}", station_id);
    match app_state.upstream.fetch_json(&station_id).await {
        Ok(body) => Json(body).into_response(),
        Err(error) => {
            tracing::error!("Error fetching programs for station {}: {:?}", station_id, error);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch programs")
        }
    }
}
