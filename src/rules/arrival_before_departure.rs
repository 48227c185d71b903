//! Rejects flights containing a segment that arrives before it departs.

use crate::model::Flight;

use super::FlightFilterRule;

/// Excludes flights with any segment whose arrival is strictly before its
/// departure. Zero-length segments pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalBeforeDepartureRule;

impl ArrivalBeforeDepartureRule {
    pub fn new() -> Self {
        Self
    }
}

impl FlightFilterRule for ArrivalBeforeDepartureRule {
    fn name(&self) -> &'static str {
        "arrival_before_departure"
    }

    fn keep(&self, flight: &Flight) -> bool {
        !flight.segments().iter().any(|s| s.is_inverted())
    }
}
