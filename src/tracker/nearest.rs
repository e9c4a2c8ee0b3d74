use crate::{
    shared::geo::Distance,
    stops::Stop,
    store::Fix,
};

/// The closest shuttle to a stop, with its straight-line distance.
#[derive(Debug, Clone)]
pub struct Nearest {
    pub fix: Fix,
    pub distance: Distance,
}

/// Picks the minimum-distance shuttle for a stop.
///
/// An empty snapshot yields `None`. Ties keep the first minimum in snapshot
/// order; the store does not guarantee any ordering, and neither does this.
pub fn nearest_shuttle(stop: &Stop, snapshot: &[Fix]) -> Option<Nearest> {
    let mut nearest: Option<Nearest> = None;
    for fix in snapshot {
        let distance = stop.coordinate.haversine_distance(&fix.coordinate);
        if nearest
            .as_ref()
            .is_none_or(|current| distance < current.distance)
        {
            nearest = Some(Nearest {
                fix: fix.clone(),
                distance,
            });
        }
    }
    nearest
}
