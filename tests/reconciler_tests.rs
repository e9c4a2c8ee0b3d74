use chrono::{DateTime, TimeZone, Utc};
use shutl::shared::geo::Coordinate;
use shutl::store::Fix;
use shutl::tracker::{MarkerColor, Reconciler};

fn fix(device_id: &str, lat: f64, lng: f64, speed_kmh: f64) -> Fix {
    fix_at(device_id, lat, lng, speed_kmh, Utc::now())
}

fn fix_at(device_id: &str, lat: f64, lng: f64, speed_kmh: f64, updated: DateTime<Utc>) -> Fix {
    Fix {
        device_id: device_id.into(),
        coordinate: Coordinate {
            latitude: lat,
            longitude: lng,
        },
        speed_kmh,
        updated,
    }
}

#[test]
fn create_markers_test() {
    let mut reconciler = Reconciler::new();
    let summary = reconciler.reconcile(&[
        fix("a", 12.9692, 79.1559, 10.0),
        fix("b", 12.9699, 79.1552, 0.0),
    ]);

    assert_eq!(summary.created, 2);
    assert_eq!(reconciler.len(), 2);
    assert_eq!(reconciler.get("a").unwrap().color, MarkerColor::Moving);
    assert_eq!(reconciler.get("b").unwrap().color, MarkerColor::Idle);
}

#[test]
fn marker_lifecycle_test() {
    let mut reconciler = Reconciler::new();
    reconciler.reconcile(&[
        fix("a", 12.9692, 79.1559, 10.0),
        fix("b", 12.9699, 79.1552, 10.0),
    ]);
    let a_id = reconciler.get("a").unwrap().id;

    let summary = reconciler.reconcile(&[
        fix("a", 12.9692, 79.1559, 10.0),
        fix("c", 12.9707, 79.1588, 10.0),
    ]);

    // b is gone, c is new, and a kept the exact same marker.
    assert_eq!(summary.created, 1);
    assert_eq!(summary.removed, 1);
    assert_eq!(summary.moved, 0);
    assert_eq!(reconciler.len(), 2);
    assert!(reconciler.get("b").is_none());
    assert!(reconciler.get("c").is_some());
    assert_eq!(reconciler.get("a").unwrap().id, a_id);
}

#[test]
fn epsilon_move_suppressed_test() {
    let mut reconciler = Reconciler::new();
    reconciler.reconcile(&[fix("a", 12.9692, 79.1559, 10.0)]);

    // Sub-microdegree wiggle on both axes: no move.
    let summary = reconciler.reconcile(&[fix("a", 12.9692 + 5e-7, 79.1559 - 5e-7, 10.0)]);
    assert_eq!(summary.moved, 0);
    assert_eq!(reconciler.get("a").unwrap().position.latitude, 12.9692);
}

#[test]
fn real_move_applied_test() {
    let mut reconciler = Reconciler::new();
    reconciler.reconcile(&[fix("a", 12.9692, 79.1559, 10.0)]);

    let summary = reconciler.reconcile(&[fix("a", 12.9702, 79.1559, 10.0)]);
    assert_eq!(summary.moved, 1);
    assert_eq!(reconciler.get("a").unwrap().position.latitude, 12.9702);
}

#[test]
fn recolor_on_speed_change_test() {
    let mut reconciler = Reconciler::new();
    reconciler.reconcile(&[fix("a", 12.9692, 79.1559, 2.0)]);
    assert_eq!(reconciler.get("a").unwrap().color, MarkerColor::Idle);

    let summary = reconciler.reconcile(&[fix("a", 12.9692, 79.1559, 12.0)]);
    assert_eq!(summary.recolored, 1);
    assert_eq!(reconciler.get("a").unwrap().color, MarkerColor::Moving);

    // Same color again: nothing to repaint.
    let summary = reconciler.reconcile(&[fix("a", 12.9692, 79.1559, 14.0)]);
    assert_eq!(summary.recolored, 0);
}

#[test]
fn popup_always_refreshed_test() {
    let mut reconciler = Reconciler::new();
    let first = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 5).unwrap();

    reconciler.reconcile(&[fix_at("a", 12.9692, 79.1559, 10.0, first)]);
    let popup_before = reconciler.get("a").unwrap().popup.clone();

    // Identical position and speed, newer report time: popup still updates.
    let summary = reconciler.reconcile(&[fix_at("a", 12.9692, 79.1559, 10.0, later)]);
    assert_eq!(summary.moved, 0);
    assert_ne!(reconciler.get("a").unwrap().popup, popup_before);
}

#[test]
fn empty_snapshot_clears_all_test() {
    let mut reconciler = Reconciler::new();
    reconciler.reconcile(&[
        fix("a", 12.9692, 79.1559, 10.0),
        fix("b", 12.9699, 79.1552, 0.0),
    ]);

    let summary = reconciler.reconcile(&[]);
    assert_eq!(summary.removed, 2);
    assert!(reconciler.is_empty());
}
