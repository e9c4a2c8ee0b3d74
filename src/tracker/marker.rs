use std::sync::Arc;

use chrono::Local;

use crate::{shared::geo::Coordinate, store::Fix};

/// Two-valued marker color, picked from the reported speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Moving,
    Idle,
}

impl MarkerColor {
    /// Strictly above 5 km/h renders as moving. The arrival estimator keeps
    /// its own `< 5` cut-off; the two checks are independent.
    pub fn for_speed(speed_kmh: f64) -> Self {
        if speed_kmh > 5.0 {
            Self::Moving
        } else {
            Self::Idle
        }
    }

    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Moving => "#ef4444",
            Self::Idle => "#f59e0b",
        }
    }
}

/// One on-screen marker, owned by the [`Reconciler`](super::Reconciler).
///
/// `id` is handed out once at creation and never changes, so callers can tell
/// a marker that survived a reconciliation apart from a destroyed-and-recreated
/// one.
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: u64,
    pub device_id: Arc<str>,
    /// Short badge text drawn inside the marker circle.
    pub label: String,
    pub position: Coordinate,
    pub color: MarkerColor,
    pub popup: String,
}

/// Condenses a device identifier into a short marker badge: the segment after
/// the last `_`, or the last two characters for long opaque ids.
pub fn display_label(device_id: &str) -> String {
    if let Some((_, tail)) = device_id.rsplit_once('_')
        && !tail.is_empty()
    {
        return tail.to_uppercase();
    }
    if device_id.chars().count() > 6 {
        let tail: String = device_id
            .chars()
            .rev()
            .take(2)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        return tail.to_uppercase();
    }
    device_id.to_uppercase()
}

/// Popup body for a marker: device id, speed, and a human-readable local
/// update time. Rebuilt on every reconciliation since it is cheap and always
/// shows the latest report.
pub fn popup_text(fix: &Fix) -> String {
    format!(
        "{}\nSpeed: {:.1} km/h\nUpdated: {}",
        fix.device_id,
        fix.speed_kmh,
        fix.updated.with_timezone(&Local).format("%H:%M:%S"),
    )
}

#[test]
fn display_label_suffix_test() {
    assert_eq!(display_label("shuttle_a1"), "A1");
    assert_eq!(display_label("campus_shuttle_07"), "07");
}

#[test]
fn display_label_long_id_test() {
    assert_eq!(display_label("9f8e7d6c5b"), "5B");
}

#[test]
fn display_label_short_id_test() {
    assert_eq!(display_label("bus3"), "BUS3");
}

#[test]
fn marker_color_threshold_test() {
    assert_eq!(MarkerColor::for_speed(5.0), MarkerColor::Idle);
    assert_eq!(MarkerColor::for_speed(5.1), MarkerColor::Moving);
    assert_eq!(MarkerColor::for_speed(0.0), MarkerColor::Idle);
}

#[test]
fn marker_color_hex_test() {
    assert_eq!(MarkerColor::Moving.hex(), "#ef4444");
    assert_eq!(MarkerColor::Idle.hex(), "#f59e0b");
}
