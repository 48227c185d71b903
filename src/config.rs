//! Filter configuration.
//!
//! A [`FilterConfig`] selects which built-in rules run and sets the ground
//! time threshold. It can be loaded from YAML; missing fields take their
//! defaults:
//!
//! ```yaml
//! max_ground_hours: 2
//! rules: [past, inverted, ground-time]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::{Clock, FixedClock, FlightFilterRule, RuleKind, DEFAULT_MAX_GROUND_HOURS};

/// Configuration for a filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Ground time threshold in whole hours.
    pub max_ground_hours: i64,
    /// Rules to apply, in order.
    pub rules: Vec<RuleKind>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_ground_hours: DEFAULT_MAX_GROUND_HOURS,
            rules: RuleKind::ALL.to_vec(),
        }
    }
}

impl FilterConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ground time threshold.
    pub fn with_max_ground_hours(mut self, hours: i64) -> Self {
        self.max_ground_hours = hours;
        self
    }

    /// Replaces the rule selection.
    pub fn with_rules(mut self, rules: impl Into<Vec<RuleKind>>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Checks that the threshold is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ground_hours < 0 {
            return Err(ConfigError::InvalidThreshold(self.max_ground_hours));
        }
        Ok(())
    }

    /// Instantiates the selected rules, reading `clock` once.
    pub fn build_rules(&self, clock: &dyn Clock) -> Vec<Box<dyn FlightFilterRule>> {
        let now = FixedClock(clock.now());
        self.rules.iter().map(|kind| kind.build(self, &now)).collect()
    }
}
