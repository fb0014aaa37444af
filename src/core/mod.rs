pub mod calendar;
pub mod comparator;
pub mod zodiac;

pub use crate::domain::model::{BetOutcome, MonthDay, ScorePair, Tendency, ZodiacSign};
pub use crate::domain::ports::{ScoreInput, SignResolver};
pub use crate::utils::error::Result;
