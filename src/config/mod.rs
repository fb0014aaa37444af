pub mod toml_config;

use crate::core::calendar::is_leap_year;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};

/// Non-leap year the resolver builds its calendar instants in.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2015;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// What the resolver does with a day that exceeds the month's real length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOverflow {
    /// Carry the excess into the following month (`04-31` becomes May 1).
    #[default]
    Carry,
    /// Report the day as out of range for its month.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub reference_year: i32,
    pub day_overflow: DayOverflow,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            day_overflow: DayOverflow::Carry,
        }
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        if !(1..=9999).contains(&self.reference_year) {
            return Err(CalcError::ConfigError {
                field: "resolver.reference_year".to_string(),
                message: format!("{} is outside 1..=9999", self.reference_year),
            });
        }

        // The sign table is defined over 365 days.
        if is_leap_year(self.reference_year) {
            return Err(CalcError::ConfigError {
                field: "resolver.reference_year".to_string(),
                message: format!("{} is a leap year", self.reference_year),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.level, &LOG_LEVELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolver_config_is_valid() {
        let config = ResolverConfig::default();
        assert_eq!(config.reference_year, 2015);
        assert_eq!(config.day_overflow, DayOverflow::Carry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_leap_reference_year_rejected() {
        let config = ResolverConfig {
            reference_year: 2016,
            ..ResolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CalcError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_reference_year_bounds() {
        for year in [0, 10_000, -3] {
            let config = ResolverConfig {
                reference_year: year,
                ..ResolverConfig::default()
            };
            assert!(config.validate().is_err(), "year {} should fail", year);
        }
    }

    #[test]
    fn test_logging_level_validation() {
        assert!(LoggingConfig::default().validate().is_ok());
        let config = LoggingConfig {
            level: "verbose".to_string(),
            format: LogFormat::Json,
        };
        assert!(config.validate().is_err());
    }
}
