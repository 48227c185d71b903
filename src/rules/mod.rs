//! Rule engine for flight filtering.
//!
//! A rule is any type implementing [`FlightFilterRule`]: a named predicate
//! deciding whether a flight is retained. The engine ([`filter`],
//! [`evaluate`]) applies a set of rules and keeps exactly the flights every
//! rule keeps, preserving input order. New rules plug in without touching the
//! engine.
//!
//! Built-in rules:
//! - [`NotInPastRule`]: drops flights whose first segment already departed.
//! - [`ArrivalBeforeDepartureRule`]: drops flights with an inverted segment.
//! - [`ExcessiveGroundTimeRule`]: keeps multi-segment flights whose summed
//!   ground time exceeds a threshold.

mod arrival_before_departure;
mod clock;
mod filter;
mod ground_time;
mod kind;
mod not_in_past;

pub use arrival_before_departure::ArrivalBeforeDepartureRule;
pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{evaluate, filter, filter_refs, FilterReport, FlightVerdict};
pub use ground_time::{ExcessiveGroundTimeRule, DEFAULT_MAX_GROUND_HOURS};
pub use kind::RuleKind;
pub use not_in_past::NotInPastRule;

use crate::model::Flight;

/// A predicate deciding whether a flight should be retained.
///
/// Implementations must be pure: the same flight always yields the same
/// answer for a given rule value.
pub trait FlightFilterRule: Send + Sync {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns `true` to retain `flight`, `false` to exclude it.
    fn keep(&self, flight: &Flight) -> bool;
}

impl<R: FlightFilterRule + ?Sized> FlightFilterRule for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn keep(&self, flight: &Flight) -> bool {
        (**self).keep(flight)
    }
}

impl<R: FlightFilterRule + ?Sized> FlightFilterRule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn keep(&self, flight: &Flight) -> bool {
        (**self).keep(flight)
    }
}
