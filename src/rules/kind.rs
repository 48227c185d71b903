//! Selection of built-in rules by name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;

use super::{
    ArrivalBeforeDepartureRule, Clock, ExcessiveGroundTimeRule, FlightFilterRule, NotInPastRule,
};

/// The built-in rule variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Drop flights that already departed.
    Past,
    /// Drop flights with a segment arriving before it departs.
    Inverted,
    /// Keep flights whose total ground time exceeds the threshold.
    GroundTime,
}

impl RuleKind {
    /// Every built-in rule, in evaluation order.
    pub const ALL: [RuleKind; 3] = [RuleKind::Past, RuleKind::Inverted, RuleKind::GroundTime];

    /// Instantiates the rule. `clock` is read once for [`RuleKind::Past`].
    pub fn build(&self, config: &FilterConfig, clock: &dyn Clock) -> Box<dyn FlightFilterRule> {
        match self {
            RuleKind::Past => Box::new(NotInPastRule::from_clock(clock)),
            RuleKind::Inverted => Box::new(ArrivalBeforeDepartureRule::new()),
            RuleKind::GroundTime => {
                Box::new(ExcessiveGroundTimeRule::with_max_hours(config.max_ground_hours))
            }
        }
    }

    /// Human-readable description used in report headings.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Past => "Departure not before the current moment",
            RuleKind::Inverted => "No segment arrives before it departs",
            RuleKind::GroundTime => "Total ground time exceeds the threshold",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Past => "past",
            RuleKind::Inverted => "inverted",
            RuleKind::GroundTime => "ground-time",
        };
        write!(f, "{}", name)
    }
}
