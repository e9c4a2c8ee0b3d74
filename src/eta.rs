use std::fmt::Display;

use crate::shared::geo::Distance;

/// Speeds below this are treated as not actually approaching, no matter how
/// close the shuttle is. The marker color cut-off in the tracker is a separate
/// `> 5` check; the two are independent.
pub const STATIONARY_BELOW_KMH: f64 = 5.0;

/// Coarse arrival estimate for a shuttle at a given distance and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    Stationary,
    Arriving,
    Minutes(u32),
    Hours(u32),
}

impl Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eta::Stationary => f.write_str("Stationary"),
            Eta::Arriving => f.write_str("Arriving"),
            Eta::Minutes(minutes) => f.write_fmt(format_args!("{} min", minutes)),
            Eta::Hours(hours) => f.write_fmt(format_args!("{} hr", hours)),
        }
    }
}

/// Estimates arrival from straight-line distance and instantaneous speed.
///
/// Whole hours round on the hour value, not on minutes, so exactly 60
/// estimated minutes lands on `Hours(1)` rather than `Minutes(60)`.
pub fn estimate(distance: Distance, speed_kmh: f64) -> Eta {
    if speed_kmh < STATIONARY_BELOW_KMH {
        return Eta::Stationary;
    }
    let hours = distance.as_kilometers() / speed_kmh;
    let minutes = (hours * 60.0).round();
    if minutes < 1.0 {
        Eta::Arriving
    } else if minutes < 60.0 {
        Eta::Minutes(minutes as u32)
    } else {
        Eta::Hours(hours.round() as u32)
    }
}

#[test]
fn eta_display_test() {
    assert_eq!(Eta::Stationary.to_string(), "Stationary");
    assert_eq!(Eta::Arriving.to_string(), "Arriving");
    assert_eq!(Eta::Minutes(12).to_string(), "12 min");
    assert_eq!(Eta::Hours(1).to_string(), "1 hr");
}
