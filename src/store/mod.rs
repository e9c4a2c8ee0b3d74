use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

mod models;
pub use models::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: device_id, lat, or lng")]
    MissingFields,
    #[error("Invalid coordinates: lat and lng must be numbers")]
    CoordinatesNotNumeric,
    #[error("Invalid coordinates: lat must be between -90 and 90, lng between -180 and 180")]
    CoordinatesOutOfRange,
}

/// In-memory mapping from device identifier to its latest [`Fix`].
///
/// Upserts are serialized behind a mutex so reports from any number of
/// concurrent devices cannot corrupt the map; two racing reports for the same
/// device resolve to whichever one lands last. Nothing is persisted across
/// restarts.
#[derive(Debug, Default)]
pub struct LocationStore {
    fixes: Mutex<HashMap<Arc<str>, Fix>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Validates a report and upserts the resulting fix.
    ///
    /// Validation runs fully before the map is touched; a rejected report
    /// leaves the store exactly as it was.
    pub fn report(&self, report: Report) -> Result<Arc<str>, ValidationError> {
        let fix = report.into_fix(Utc::now())?;
        let device_id = fix.device_id.clone();
        debug!("Fix for {device_id}: {}", fix.coordinate);
        self.fixes
            .lock()
            .unwrap()
            .insert(device_id.clone(), fix);
        Ok(device_id)
    }

    /// The latest fix for one device, if it has ever reported.
    pub fn get(&self, device_id: &str) -> Option<Fix> {
        self.fixes.lock().unwrap().get(device_id).cloned()
    }

    /// Every current fix, in no particular order.
    pub fn snapshot(&self) -> Vec<Fix> {
        self.fixes.lock().unwrap().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.fixes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.lock().unwrap().is_empty()
    }
}
