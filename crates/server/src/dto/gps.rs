use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shutl::store::Fix;

/// Wire shape of one fix, as reported by devices and served back to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixDto {
    pub device_id: String,
    pub lat: f64,
    pub lng: f64,
    pub speed: f64,
    pub updated: DateTime<Utc>,
}

impl FixDto {
    pub fn from(fix: &Fix) -> Self {
        Self {
            device_id: fix.device_id.to_string(),
            lat: fix.coordinate.latitude,
            lng: fix.coordinate.longitude,
            speed: fix.speed_kmh,
            updated: fix.updated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
