pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, DayOverflow, LoggingConfig, ResolverConfig};
pub use crate::core::{comparator::ScoreComparator, zodiac::ZodiacResolver};
pub use crate::domain::model::{BetOutcome, MonthDay, ScorePair, Tendency, ZodiacSign};
pub use crate::domain::ports::{ScoreInput, SignResolver};
pub use crate::utils::error::{CalcError, Result};
