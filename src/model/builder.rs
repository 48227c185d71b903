//! Flight construction from paired timestamps.
//!
//! Provides the demonstration data set used by the CLI and the tests.

use chrono::{Duration, NaiveDateTime};

use crate::error::FlightError;

use super::{Flight, Segment};

/// Factory for flights built from flat `(departure, arrival, ...)` lists.
pub struct FlightBuilder;

impl FlightBuilder {
    /// Builds a flight by pairing consecutive timestamps as departure/arrival.
    ///
    /// # Errors
    ///
    /// Returns [`FlightError::OddTimestampCount`] if `dates` has odd length
    /// and [`FlightError::EmptyFlight`] if it is empty.
    pub fn create_flight(dates: &[NaiveDateTime]) -> Result<Flight, FlightError> {
        if dates.len() % 2 != 0 {
            return Err(FlightError::OddTimestampCount { count: dates.len() });
        }
        let segments = dates
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Flight::new(segments)
    }

    /// Returns the six-flight demonstration set relative to `base`.
    ///
    /// Every flight is anchored three days after `base`:
    /// 1. a normal two hour flight
    /// 2. a normal multi-segment flight
    /// 3. a flight departing in the past
    /// 4. a flight that arrives before it departs
    /// 5. a flight with more than two hours ground time
    /// 6. another flight with more than two hours ground time
    pub fn sample_flights(base: NaiveDateTime) -> Vec<Flight> {
        let t = base + Duration::days(3);
        let h = Duration::hours;

        let sets: [Vec<NaiveDateTime>; 6] = [
            vec![t, t + h(2)],
            vec![t, t + h(2), t + h(3), t + h(5)],
            vec![t - Duration::days(6), t],
            vec![t, t - h(6)],
            vec![t, t + h(2), t + h(5), t + h(6)],
            vec![t, t + h(2), t + h(3), t + h(4), t + h(6), t + h(7)],
        ];

        // Every list above is even and non-empty.
        sets.iter()
            .filter_map(|dates| Self::create_flight(dates).ok())
            .collect()
    }
}
