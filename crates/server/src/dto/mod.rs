mod gps;

pub use gps::*;
