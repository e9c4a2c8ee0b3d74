use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tracing::trace;

use crate::store::Fix;

use super::{Marker, MarkerColor, display_label, popup_text};

/// Positions closer than this on both axes are treated as unchanged.
/// One microdegree is well under a meter, so skipping the move avoids
/// sub-pixel redraw churn without ever hiding real movement.
pub const POSITION_EPSILON_DEG: f64 = 1e-6;

/// What one reconciliation pass actually changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub moved: usize,
    pub recolored: usize,
    pub removed: usize,
}

/// Keeps a persistent set of markers in sync with polled snapshots.
///
/// Markers are updated in place across snapshots instead of being rebuilt, so
/// a marker keeps its identity (and any transient UI state hanging off it) for
/// as long as its device keeps appearing. After every call to [`reconcile`]
/// the marker key set equals exactly the device ids of the latest snapshot.
///
/// [`reconcile`]: Reconciler::reconcile
#[derive(Debug, Default)]
pub struct Reconciler {
    markers: HashMap<Arc<str>, Marker>,
    next_id: u64,
}

impl Reconciler {
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies one snapshot: creates markers for new devices, updates known
    /// ones in place, and destroys markers whose device is gone.
    ///
    /// A known marker is recolored only when its color actually flips and
    /// moved only when either axis shifts by more than
    /// [`POSITION_EPSILON_DEG`]; the popup text is always refreshed.
    pub fn reconcile(&mut self, snapshot: &[Fix]) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        let mut known: HashSet<Arc<str>> = self.markers.keys().cloned().collect();

        for fix in snapshot {
            let color = MarkerColor::for_speed(fix.speed_kmh);
            match self.markers.get_mut(&fix.device_id) {
                Some(marker) => {
                    if marker.color != color {
                        marker.color = color;
                        summary.recolored += 1;
                    }
                    if position_changed(marker, fix) {
                        marker.position = fix.coordinate;
                        summary.moved += 1;
                    }
                    marker.popup = popup_text(fix);
                }
                None => {
                    let marker = Marker {
                        id: self.next_id,
                        device_id: fix.device_id.clone(),
                        label: display_label(&fix.device_id),
                        position: fix.coordinate,
                        color,
                        popup: popup_text(fix),
                    };
                    trace!("New marker {} for {}", marker.id, marker.device_id);
                    self.next_id += 1;
                    self.markers.insert(fix.device_id.clone(), marker);
                    summary.created += 1;
                }
            }
            known.remove(fix.device_id.as_ref());
        }

        // Whatever is left had a marker but no fix in this snapshot.
        for device_id in known {
            trace!("Removing marker for {device_id}");
            self.markers.remove(&device_id);
            summary.removed += 1;
        }

        summary
    }

    pub fn get(&self, device_id: &str) -> Option<&Marker> {
        self.markers.get(device_id)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

fn position_changed(marker: &Marker, fix: &Fix) -> bool {
    (marker.position.latitude - fix.coordinate.latitude).abs() > POSITION_EPSILON_DEG
        || (marker.position.longitude - fix.coordinate.longitude).abs() > POSITION_EPSILON_DEG
}
