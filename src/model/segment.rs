//! A single leg of travel.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Date-time pattern used when rendering segments.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One continuous leg of travel with a departure and an arrival instant.
///
/// No ordering is enforced between the two instants. A segment arriving
/// before it departs is representable and is what
/// [`ArrivalBeforeDepartureRule`](crate::rules::ArrivalBeforeDepartureRule)
/// detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self { departure, arrival }
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns true when the segment arrives strictly before it departs.
    ///
    /// Equal instants are a degenerate but valid segment.
    pub fn is_inverted(&self) -> bool {
        self.arrival < self.departure
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(DISPLAY_FORMAT),
            self.arrival.format(DISPLAY_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn instant(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid date")
    }

    #[test]
    fn test_display_format() {
        let segment = Segment::new(instant(9, 5), instant(21, 30));
        assert_eq!(segment.to_string(), "[2024-03-07T09:05|2024-03-07T21:30]");
    }

    #[test]
    fn test_display_drops_seconds() {
        let dep = instant(9, 5) + Duration::seconds(59);
        let segment = Segment::new(dep, dep);
        assert_eq!(segment.to_string(), "[2024-03-07T09:05|2024-03-07T09:05]");
    }

    #[test]
    fn test_is_inverted() {
        assert!(Segment::new(instant(10, 0), instant(4, 0)).is_inverted());
        assert!(!Segment::new(instant(10, 0), instant(12, 0)).is_inverted());
        assert!(!Segment::new(instant(10, 0), instant(10, 0)).is_inverted());
    }

    #[test]
    fn test_accessors() {
        let segment = Segment::new(instant(1, 0), instant(2, 0));
        assert_eq!(segment.departure(), instant(1, 0));
        assert_eq!(segment.arrival(), instant(2, 0));
    }
}
