pub mod eta;
pub mod shared;
pub mod stops;
pub mod store;
pub mod tracker;

pub mod prelude {
    pub use crate::eta::Eta;
    pub use crate::shared::geo::{Coordinate, Distance};
    pub use crate::stops::{STOPS, Stop};
    pub use crate::store::{Fix, LocationStore, Report, ValidationError};
    pub use crate::tracker::{Marker, MarkerColor, Nearest, PollGate, Reconciler};
}
