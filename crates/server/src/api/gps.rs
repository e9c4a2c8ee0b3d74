use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use shutl::store::{Report, ValidationError};
use tracing::warn;

use crate::{
    dto::{ErrorResponse, FixDto, MessageResponse, ReportResponse},
    state::AppState,
};

/// `POST /gps` — upsert one device's fix.
pub async fn report(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return bad_request("Invalid JSON or request format");
    };
    let report = match report_from_json(&body) {
        Ok(report) => report,
        Err(err) => return bad_request(&err.to_string()),
    };
    match state.store.report(report) {
        Ok(device_id) => Json(ReportResponse {
            success: true,
            device_id: device_id.to_string(),
        })
        .into_response(),
        Err(err) => {
            warn!("Rejected report: {err}");
            bad_request(&err.to_string())
        }
    }
}

/// `GET /gps` — one device's fix when `device_id` is given, else the full
/// snapshot. Either way the response must not be cached by any intermediary.
pub async fn query(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Response {
    if let Some(device_id) = params.get("device_id") {
        match state.store.get(device_id) {
            Some(fix) => (no_cache_headers(), Json(FixDto::from(&fix))).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                no_cache_headers(),
                Json(MessageResponse {
                    message: "No data found for this device".to_string(),
                }),
            )
                .into_response(),
        }
    } else {
        let fixes: Vec<_> = state.store.snapshot().iter().map(FixDto::from).collect();
        (no_cache_headers(), Json(fixes)).into_response()
    }
}

/// Field presence and typing mirror the reporting firmware's loose JSON:
/// absent fields are "missing", present non-numbers are "not numeric", and
/// range checking is left to the store.
fn report_from_json(body: &Value) -> Result<Report, ValidationError> {
    let device_id = body.get("device_id").and_then(Value::as_str);
    let (Some(device_id), Some(lat), Some(lng)) = (device_id, body.get("lat"), body.get("lng"))
    else {
        return Err(ValidationError::MissingFields);
    };
    if device_id.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let (Some(latitude), Some(longitude)) = (lat.as_f64(), lng.as_f64()) else {
        return Err(ValidationError::CoordinatesNotNumeric);
    };
    Ok(Report {
        device_id: Some(device_id.to_string()),
        latitude: Some(latitude),
        longitude: Some(longitude),
        speed_kmh: body.get("speed").and_then(Value::as_f64),
    })
}

fn bad_request(error: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn no_cache_headers() -> [(HeaderName, &'static str); 3] {
    [
        (
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, proxy-revalidate",
        ),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
    ]
}
