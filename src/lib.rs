//! flight-filter: rule-based filtering of flight itineraries.
//!
//! A [`Flight`] is an ordered, non-empty list of [`Segment`]s. Rules
//! implementing [`FlightFilterRule`] decide which flights to retain, and
//! [`filter`] applies a rule set while preserving input order.
//!
//! ```
//! use chrono::NaiveDate;
//! use flight_filter::{filter, ArrivalBeforeDepartureRule, FlightBuilder, FlightFilterRule};
//!
//! let base = NaiveDate::from_ymd_opt(2025, 1, 1)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! let flights = FlightBuilder::sample_flights(base);
//! let rules: [&dyn FlightFilterRule; 1] = [&ArrivalBeforeDepartureRule];
//! assert_eq!(filter(&flights, &rules).len(), 5);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod rules;

pub use config::FilterConfig;
pub use error::{ConfigError, FlightError};
pub use model::{ground_hours, Flight, FlightBuilder, Segment};
pub use rules::{
    evaluate, filter, filter_refs, ArrivalBeforeDepartureRule, Clock, ExcessiveGroundTimeRule,
    FilterReport, FixedClock, FlightFilterRule, FlightVerdict, NotInPastRule, RuleKind,
    SystemClock,
};
