use crate::shared::geo::Coordinate;

/// A fixed campus location that shuttles serve.
///
/// The stop list is compiled in and never changes at runtime, so stops are
/// plain static data rather than store entities.
#[derive(Debug, Clone, Copy)]
pub struct Stop {
    /// Unique identifier for the stop.
    pub id: &'static str,
    /// Human-readable name shown on arrival boards.
    pub name: &'static str,
    pub coordinate: Coordinate,
}

/// Every shuttle stop on campus.
pub const STOPS: [Stop; 6] = [
    Stop {
        id: "1",
        name: "Main Gate",
        coordinate: Coordinate {
            latitude: 12.9692,
            longitude: 79.1559,
        },
    },
    Stop {
        id: "2",
        name: "Men's Hostel",
        coordinate: Coordinate {
            latitude: 12.9699,
            longitude: 79.1552,
        },
    },
    Stop {
        id: "3",
        name: "Technology Tower",
        coordinate: Coordinate {
            latitude: 12.9707,
            longitude: 79.1588,
        },
    },
    Stop {
        id: "4",
        name: "Silver Jubilee Tower",
        coordinate: Coordinate {
            latitude: 12.9690,
            longitude: 79.1575,
        },
    },
    Stop {
        id: "5",
        name: "Anna Auditorium",
        coordinate: Coordinate {
            latitude: 12.9684,
            longitude: 79.1565,
        },
    },
    Stop {
        id: "6",
        name: "Food Court",
        coordinate: Coordinate {
            latitude: 12.9702,
            longitude: 79.1567,
        },
    },
];
