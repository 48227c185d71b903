//! Command-line interface for flight-filter.
//!
//! Provides commands for printing the demonstration flights, filtering them
//! with a rule set, and reporting per-rule results.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands, FilterArgs, SampleArgs};
