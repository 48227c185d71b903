//! Applying rule sets to flight sequences.

use serde::Serialize;
use tracing::debug;

use crate::model::Flight;

use super::FlightFilterRule;

/// Returns the flights every rule keeps, in input order.
///
/// With no rules every flight is retained. The input is not modified.
pub fn filter<R: FlightFilterRule>(flights: &[Flight], rules: &[R]) -> Vec<Flight> {
    filter_refs(flights, rules).into_iter().cloned().collect()
}

/// Like [`filter`] but borrows the retained flights.
pub fn filter_refs<'a, R: FlightFilterRule>(
    flights: &'a [Flight],
    rules: &[R],
) -> Vec<&'a Flight> {
    flights
        .iter()
        .enumerate()
        .filter(|(index, flight)| {
            rules.iter().all(|rule| {
                let keep = rule.keep(flight);
                if !keep {
                    debug!(flight = index, rule = rule.name(), "Flight rejected");
                }
                keep
            })
        })
        .map(|(_, flight)| flight)
        .collect()
}

/// Outcome of every rule for a single flight.
#[derive(Debug, Clone, Serialize)]
pub struct FlightVerdict<'a> {
    /// Position of the flight in the input sequence.
    pub index: usize,
    pub flight: &'a Flight,
    /// Names of the rules that rejected the flight.
    pub rejected_by: Vec<&'static str>,
}

impl FlightVerdict<'_> {
    /// Returns true if no rule rejected the flight.
    pub fn kept(&self) -> bool {
        self.rejected_by.is_empty()
    }
}

/// Per-flight verdicts for a filter pass.
///
/// Unlike [`filter`], every rule is evaluated for every flight so the report
/// lists all reasons a flight was excluded.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport<'a> {
    pub verdicts: Vec<FlightVerdict<'a>>,
}

impl<'a> FilterReport<'a> {
    /// Flights kept by every rule, in input order.
    pub fn retained(&self) -> impl Iterator<Item = &'a Flight> + '_ {
        self.verdicts.iter().filter(|v| v.kept()).map(|v| v.flight)
    }

    /// Verdicts of flights rejected by at least one rule.
    pub fn rejected(&self) -> impl Iterator<Item = &FlightVerdict<'a>> + '_ {
        self.verdicts.iter().filter(|v| !v.kept())
    }

    /// Human-readable summary line.
    pub fn summary(&self) -> String {
        let total = self.verdicts.len();
        let kept = self.retained().count();
        format!("{} of {} flights retained", kept, total)
    }
}

/// Evaluates every rule against every flight.
pub fn evaluate<'a, R: FlightFilterRule>(flights: &'a [Flight], rules: &[R]) -> FilterReport<'a> {
    let verdicts = flights
        .iter()
        .enumerate()
        .map(|(index, flight)| FlightVerdict {
            index,
            flight,
            rejected_by: rules
                .iter()
                .filter(|rule| !rule.keep(flight))
                .map(|rule| rule.name())
                .collect(),
        })
        .collect();
    FilterReport { verdicts }
}
