use chrono::{DateTime, Utc};

/// A fix older than this many milliseconds reads as offline.
pub const OFFLINE_AFTER_MS: i64 = 60_000;

/// Whether a fix has gone stale.
///
/// Strictly greater-than, so a fix exactly 60 seconds old still counts as
/// live. There is no hysteresis: one late poll flips the status immediately,
/// and the next fresh report flips it right back.
pub fn is_offline(updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - updated).num_milliseconds() > OFFLINE_AFTER_MS
}

/// Whether the reported speed reads as "Moving" rather than "Stationary" on
/// status chips. Same 5 km/h figure as the arrival estimator's cut-off but a
/// strict `>`; the two checks are independent and kept that way.
pub fn is_moving(speed_kmh: f64) -> bool {
    speed_kmh > 5.0
}

#[test]
fn moving_threshold_test() {
    assert!(!is_moving(5.0));
    assert!(is_moving(5.2));
    assert!(!is_moving(0.0));
}
