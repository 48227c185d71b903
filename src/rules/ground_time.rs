//! Ground time between connecting segments.
//!
//! The rule sums the whole-hour ground time over every connection of a
//! flight and keeps the flight when the total is strictly greater than the
//! threshold, i.e. it selects flights with excessive ground time.
//! Single-segment flights have no connections and are always kept.

use crate::model::Flight;

use super::FlightFilterRule;

/// Default ground time threshold in whole hours.
pub const DEFAULT_MAX_GROUND_HOURS: i64 = 2;

/// Keeps multi-segment flights whose total ground time exceeds `max_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcessiveGroundTimeRule {
    max_hours: i64,
}

impl Default for ExcessiveGroundTimeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcessiveGroundTimeRule {
    /// Creates the rule with the default two hour threshold.
    pub fn new() -> Self {
        Self::with_max_hours(DEFAULT_MAX_GROUND_HOURS)
    }

    /// Creates the rule with a custom threshold.
    pub fn with_max_hours(max_hours: i64) -> Self {
        Self { max_hours }
    }

    pub fn max_hours(&self) -> i64 {
        self.max_hours
    }
}

impl FlightFilterRule for ExcessiveGroundTimeRule {
    fn name(&self) -> &'static str {
        "excessive_ground_time"
    }

    fn keep(&self, flight: &Flight) -> bool {
        if flight.segments().len() < 2 {
            return true;
        }
        flight.ground_hours() > self.max_hours
    }
}
