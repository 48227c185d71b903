//! Rejects flights that have already departed.

use chrono::NaiveDateTime;

use crate::model::Flight;

use super::{Clock, FlightFilterRule};

/// Excludes flights whose first segment departs strictly before `now`.
///
/// A flight departing exactly at `now` is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotInPastRule {
    now: NaiveDateTime,
}

impl NotInPastRule {
    /// Creates the rule with an explicit reference instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Creates the rule by reading `clock` once.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.now())
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }
}

impl FlightFilterRule for NotInPastRule {
    fn name(&self) -> &'static str {
        "not_in_past"
    }

    fn keep(&self, flight: &Flight) -> bool {
        flight.first_departure() >= self.now
    }
}
