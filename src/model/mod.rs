//! Flight data model.
//!
//! Immutable value types for itineraries: a [`Segment`] is one leg with a
//! departure and arrival instant, a [`Flight`] is a non-empty, ordered list of
//! segments. [`FlightBuilder`] constructs flights from paired timestamps and
//! produces the demonstration data set.

mod builder;
mod flight;
mod segment;

pub use builder::FlightBuilder;
pub use flight::{ground_hours, Flight};
pub use segment::{Segment, DISPLAY_FORMAT};
