use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::shared::geo::Coordinate;

use super::ValidationError;

/// One shuttle's most recently reported state.
///
/// At most one fix exists per device at any time; a newer report replaces the
/// old fix wholesale, old timestamp included.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Opaque device identifier, unique per shuttle unit.
    pub device_id: Arc<str>,
    pub coordinate: Coordinate,
    /// Instantaneous speed in km/h, 0 when the device did not report one.
    pub speed_kmh: f64,
    /// Server-side time the report was accepted.
    pub updated: DateTime<Utc>,
}

/// An incoming position report, before validation.
///
/// Fields are optional because the wire format allows any of them to be
/// absent; [`LocationStore::report`](super::LocationStore::report) turns a
/// report into a [`Fix`] or rejects it.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub device_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed_kmh: Option<f64>,
}

impl Report {
    pub(super) fn into_fix(self, updated: DateTime<Utc>) -> Result<Fix, ValidationError> {
        let device_id = match self.device_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ValidationError::MissingFields),
        };
        let (latitude, longitude) = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => return Err(ValidationError::MissingFields),
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ValidationError::CoordinatesNotNumeric);
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::CoordinatesOutOfRange);
        }
        Ok(Fix {
            device_id: device_id.into(),
            coordinate: Coordinate {
                latitude,
                longitude,
            },
            speed_kmh: self.speed_kmh.unwrap_or(0.0).max(0.0),
            updated,
        })
    }
}
