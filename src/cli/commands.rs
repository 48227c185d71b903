//! CLI command definitions for flight-filter.
//!
//! Every command works on the demonstration flight set anchored at the
//! current local time, which is read exactly once per invocation.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::model::{Flight, FlightBuilder};
use crate::rules::{self, Clock, FixedClock, RuleKind, SystemClock};

/// Rule-based filtering of flight itineraries.
#[derive(Parser)]
#[command(name = "flight-filter")]
#[command(about = "Filter flight itineraries with composable validity rules")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Print the demonstration flight set.
    Sample(SampleArgs),

    /// Apply all selected rules together and print the retained flights.
    Filter(FilterArgs),

    /// Apply each selected rule on its own and print what it keeps.
    Report(FilterArgs),
}

/// Arguments for `flight-filter sample`.
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Output JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Arguments for `flight-filter filter` and `flight-filter report`.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// YAML configuration file.
    #[arg(short = 'c', long, env = "FLIGHT_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rule to apply; repeat to select several. Overrides the config file.
    #[arg(short = 'r', long = "rule", value_enum)]
    pub rules: Vec<RuleKind>,

    /// Ground time threshold in whole hours. Overrides the config file.
    #[arg(long)]
    pub max_ground_hours: Option<i64>,

    /// Output JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl FilterArgs {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<FilterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading filter config");
                FilterConfig::from_yaml_file(path)?
            }
            None => FilterConfig::default(),
        };
        if !self.rules.is_empty() {
            config.rules = self.rules.clone();
        }
        if let Some(hours) = self.max_ground_hours {
            config.max_ground_hours = hours;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let now = SystemClock.now();
    match cli.command {
        Commands::Sample(args) => run_sample_command(args, now),
        Commands::Filter(args) => run_filter_command(args, now),
        Commands::Report(args) => run_report_command(args, now),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct FlightListOutput {
    generated_at: NaiveDateTime,
    flights: Vec<Flight>,
}

#[derive(Debug, Clone, Serialize)]
struct RuleListing {
    rule: RuleKind,
    description: &'static str,
    flights: Vec<Flight>,
}

#[derive(Debug, Clone, Serialize)]
struct ReportOutput {
    generated_at: NaiveDateTime,
    max_ground_hours: i64,
    initial: Vec<Flight>,
    rules: Vec<RuleListing>,
    combined: Vec<Flight>,
}

fn run_sample_command(args: SampleArgs, now: NaiveDateTime) -> anyhow::Result<()> {
    let output = FlightListOutput {
        generated_at: now,
        flights: FlightBuilder::sample_flights(now),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Initial flight data:");
    print_flights(&output.flights);
    Ok(())
}

fn run_filter_command(args: FilterArgs, now: NaiveDateTime) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let flights = FlightBuilder::sample_flights(now);
    let active_rules = config.build_rules(&FixedClock(now));

    let report = rules::evaluate(&flights, &active_rules);
    for verdict in report.rejected() {
        debug!(
            flight = verdict.index,
            rejected_by = ?verdict.rejected_by,
            "Flight excluded"
        );
    }
    info!(rules = ?config.rules, "{}", report.summary());

    let output = FlightListOutput {
        generated_at: now,
        flights: report.retained().cloned().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_flights(&output.flights);
    Ok(())
}

fn run_report_command(args: FilterArgs, now: NaiveDateTime) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let output = build_report(&config, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Initial flight data:");
    print_flights(&output.initial);
    println!("\n=======================================================");
    for listing in &output.rules {
        println!("{} ({}):", listing.description, listing.rule);
        print_flights(&listing.flights);
    }
    println!("\nAll rules combined:");
    print_flights(&output.combined);
    Ok(())
}

fn build_report(config: &FilterConfig, now: NaiveDateTime) -> ReportOutput {
    let flights = FlightBuilder::sample_flights(now);
    let clock = FixedClock(now);

    let listings = config
        .rules
        .iter()
        .map(|kind| {
            let rule = [kind.build(config, &clock)];
            RuleListing {
                rule: *kind,
                description: kind.description(),
                flights: rules::filter(&flights, &rule),
            }
        })
        .collect();

    ReportOutput {
        generated_at: now,
        max_ground_hours: config.max_ground_hours,
        combined: rules::filter(&flights, &config.build_rules(&clock)),
        rules: listings,
        initial: flights,
    }
}

fn print_flights(flights: &[Flight]) {
    if flights.is_empty() {
        println!("  (none)");
        return;
    }
    for flight in flights {
        println!("  {}", flight);
    }
}
