//! Multi-segment itineraries.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;

use super::segment::Segment;

/// Whole hours on the ground between an arrival and the next departure.
///
/// Truncates toward zero. The result is negative when the next departure
/// precedes the previous arrival (overlapping segments).
pub fn ground_hours(arrival: NaiveDateTime, departure: NaiveDateTime) -> i64 {
    departure.signed_duration_since(arrival).num_hours()
}

/// An ordered itinerary of one or more segments.
///
/// Segment order is travel order as supplied by the caller; it is never
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FlightRepr")]
pub struct Flight {
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct FlightRepr {
    segments: Vec<Segment>,
}

impl TryFrom<FlightRepr> for Flight {
    type Error = FlightError;

    fn try_from(repr: FlightRepr) -> Result<Self, Self::Error> {
        Flight::new(repr.segments)
    }
}

impl Flight {
    /// Creates a flight from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`FlightError::EmptyFlight`] if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self, FlightError> {
        if segments.is_empty() {
            return Err(FlightError::EmptyFlight);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Departure of the first segment.
    pub fn first_departure(&self) -> NaiveDateTime {
        self.segments[0].departure()
    }

    /// Arrival of the last segment.
    pub fn last_arrival(&self) -> NaiveDateTime {
        self.segments[self.segments.len() - 1].arrival()
    }

    /// Total ground time in whole hours across all connections.
    ///
    /// Each connection between consecutive segments is truncated to whole
    /// hours on its own before summing. A single-segment flight has none.
    pub fn ground_hours(&self) -> i64 {
        self.segments
            .windows(2)
            .map(|pair| ground_hours(pair[0].arrival(), pair[1].departure()))
            .sum()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
