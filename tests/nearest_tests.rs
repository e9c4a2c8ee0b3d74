use chrono::Utc;
use shutl::shared::geo::Coordinate;
use shutl::stops::STOPS;
use shutl::store::Fix;
use shutl::tracker::nearest_shuttle;

fn fix(device_id: &str, lat: f64, lng: f64) -> Fix {
    Fix {
        device_id: device_id.into(),
        coordinate: Coordinate {
            latitude: lat,
            longitude: lng,
        },
        speed_kmh: 10.0,
        updated: Utc::now(),
    }
}

#[test]
fn empty_snapshot_test() {
    assert!(nearest_shuttle(&STOPS[0], &[]).is_none());
}

#[test]
fn picks_minimum_test() {
    let stop = STOPS[0];
    let lat = stop.coordinate.latitude;
    let lng = stop.coordinate.longitude;
    // Offsets of 0.027, 0.009 and 0.018 degrees of latitude are roughly 3, 1
    // and 2 km.
    let snapshot = [
        fix("far", lat + 0.027, lng),
        fix("near", lat + 0.009, lng),
        fix("mid", lat + 0.018, lng),
    ];

    let nearest = nearest_shuttle(&stop, &snapshot).unwrap();
    assert_eq!(nearest.fix.device_id.as_ref(), "near");
    assert!((nearest.distance.as_kilometers() - 1.0).abs() < 0.1);
}

#[test]
fn tie_keeps_first_test() {
    let stop = STOPS[0];
    let lat = stop.coordinate.latitude;
    let lng = stop.coordinate.longitude;
    let snapshot = [fix("first", lat + 0.01, lng), fix("second", lat + 0.01, lng)];

    let nearest = nearest_shuttle(&stop, &snapshot).unwrap();
    assert_eq!(nearest.fix.device_id.as_ref(), "first");
}

#[test]
fn shuttle_at_stop_test() {
    let stop = STOPS[2];
    let snapshot = [fix("parked", stop.coordinate.latitude, stop.coordinate.longitude)];

    let nearest = nearest_shuttle(&stop, &snapshot).unwrap();
    assert_eq!(nearest.distance.as_meters(), 0.0);
}
