use shutl::eta::{Eta, estimate};
use shutl::shared::geo::Distance;

#[test]
fn stationary_test() {
    // 10 km away but crawling: distance never matters below the cut-off.
    let eta = estimate(Distance::from_kilometers(10.0), 3.0);
    assert_eq!(eta, Eta::Stationary);
}

#[test]
fn arriving_test() {
    // 0.2 km at 30 km/h is 0.4 minutes, which rounds down to zero.
    let eta = estimate(Distance::from_kilometers(0.2), 30.0);
    assert_eq!(eta, Eta::Arriving);
}

#[test]
fn one_minute_boundary_test() {
    // 1 km at 60 km/h is exactly one minute: the `< 1` check does not fire,
    // so this reads "1 min", not "Arriving".
    let eta = estimate(Distance::from_kilometers(1.0), 60.0);
    assert_eq!(eta, Eta::Minutes(1));
}

#[test]
fn minutes_test() {
    let eta = estimate(Distance::from_kilometers(10.0), 20.0);
    assert_eq!(eta, Eta::Minutes(30));
}

#[test]
fn hour_boundary_test() {
    // Exactly 60 estimated minutes falls out of the minutes branch and lands
    // on whole hours.
    let eta = estimate(Distance::from_kilometers(50.0), 50.0);
    assert_eq!(eta, Eta::Hours(1));
}

#[test]
fn hours_round_on_hours_test() {
    // 100 km at 60 km/h: 100 estimated minutes, but the hour figure rounds on
    // the hour value itself (1.67 h -> 2 hr), not on minutes divided by 60.
    let eta = estimate(Distance::from_kilometers(100.0), 60.0);
    assert_eq!(eta, Eta::Hours(2));
}

#[test]
fn long_trip_test() {
    let eta = estimate(Distance::from_kilometers(500.0), 50.0);
    assert_eq!(eta, Eta::Hours(10));
}

#[test]
fn zero_distance_test() {
    let eta = estimate(Distance::from_kilometers(0.0), 40.0);
    assert_eq!(eta, Eta::Arriving);
}
