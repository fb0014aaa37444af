use crate::core::{BetOutcome, Result, ScoreInput, ScorePair};
use crate::utils::error::CalcError;
use crate::utils::validation::validate_required_field;

const RESULTS_REQUIRED: &str = "Real and bet results must be set";

/// Compares a predicted scoreline against the real one.
///
/// Both pairs start unset and can be replaced any number of times. The
/// predicates fail with [`CalcError::PreconditionError`] until both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreComparator {
    real: Option<ScorePair>,
    bet: Option<ScorePair>,
}

impl ScoreComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a comparator from four optional values. A pair is assigned when
    /// its home value is present, in which case the away value is required.
    pub fn from_scores<T: ScoreInput>(
        real_home: Option<T>,
        real_away: Option<T>,
        bet_home: Option<T>,
        bet_away: Option<T>,
    ) -> Result<Self> {
        let mut comparator = Self::new();

        if let Some(home) = real_home {
            let away = validate_required_field("real away score", &real_away)?;
            comparator.real = Some(parse_pair("real", &home, away)?);
        }

        if let Some(home) = bet_home {
            let away = validate_required_field("bet away score", &bet_away)?;
            comparator.bet = Some(parse_pair("bet", &home, away)?);
        }

        Ok(comparator)
    }

    pub fn with_real(mut self, home: impl ScoreInput, away: impl ScoreInput) -> Result<Self> {
        self.set_real(home, away)?;
        Ok(self)
    }

    pub fn with_bet(mut self, home: impl ScoreInput, away: impl ScoreInput) -> Result<Self> {
        self.set_bet(home, away)?;
        Ok(self)
    }

    pub fn set_real(&mut self, home: impl ScoreInput, away: impl ScoreInput) -> Result<()> {
        let pair = parse_pair("real", &home, &away)?;
        tracing::trace!(score = %pair, "real result set");
        self.real = Some(pair);
        Ok(())
    }

    pub fn set_bet(&mut self, home: impl ScoreInput, away: impl ScoreInput) -> Result<()> {
        let pair = parse_pair("bet", &home, &away)?;
        tracing::trace!(score = %pair, "bet result set");
        self.bet = Some(pair);
        Ok(())
    }

    pub fn real(&self) -> Option<ScorePair> {
        self.real
    }

    pub fn bet(&self) -> Option<ScorePair> {
        self.bet
    }

    pub fn is_exact_match(&self) -> Result<bool> {
        let (real, bet) = self.settled()?;
        Ok(bet == real)
    }

    pub fn is_same_difference(&self) -> Result<bool> {
        let (real, bet) = self.settled()?;
        Ok(real.difference() == bet.difference())
    }

    pub fn is_same_tendency(&self) -> Result<bool> {
        let (real, bet) = self.settled()?;
        Ok(real.tendency() == bet.tendency())
    }

    pub fn evaluate(&self) -> Result<BetOutcome> {
        Ok(BetOutcome {
            exact: self.is_exact_match()?,
            same_difference: self.is_same_difference()?,
            same_tendency: self.is_same_tendency()?,
        })
    }

    fn settled(&self) -> Result<(ScorePair, ScorePair)> {
        match (self.real, self.bet) {
            (Some(real), Some(bet)) => Ok((real, bet)),
            _ => Err(CalcError::PreconditionError {
                message: RESULTS_REQUIRED.to_string(),
            }),
        }
    }
}

// Home is validated before away; nothing is stored unless both pass.
fn parse_pair(side: &str, home: &dyn ScoreInput, away: &dyn ScoreInput) -> Result<ScorePair> {
    let home = parse_score(&format!("{} home score", side), home)?;
    let away = parse_score(&format!("{} away score", side), away)?;
    Ok(ScorePair::new(home, away))
}

fn parse_score(field: &str, value: &dyn ScoreInput) -> Result<u32> {
    value.to_score().ok_or_else(|| CalcError::InvalidInput {
        field: field.to_string(),
        value: format!("{:?}", value),
        reason: "has to be a non-negative integer".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_comparator_fails_precondition() {
        let comparator = ScoreComparator::new();
        assert!(matches!(
            comparator.is_exact_match(),
            Err(CalcError::PreconditionError { .. })
        ));
    }

    #[test]
    fn test_failed_set_keeps_previous_pair() {
        let mut comparator = ScoreComparator::new();
        comparator.set_real(2, 1).unwrap();
        assert!(comparator.set_real(3, -1).is_err());
        assert_eq!(comparator.real(), Some(ScorePair::new(2, 1)));
    }

    #[test]
    fn test_error_names_field_and_value() {
        let mut comparator = ScoreComparator::new();
        match comparator.set_bet(1, -4) {
            Err(CalcError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "bet away score");
                assert_eq!(value, "-4");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_home_checked_before_away() {
        let mut comparator = ScoreComparator::new();
        match comparator.set_real(-1, -2) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "real home score"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_from_scores_requires_away_with_home() {
        let result = ScoreComparator::from_scores(Some(1), None, None, None);
        match result {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "real away score"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_from_scores_partial() {
        let comparator = ScoreComparator::from_scores(None, None, Some(1), Some(0)).unwrap();
        assert_eq!(comparator.real(), None);
        assert_eq!(comparator.bet(), Some(ScorePair::new(1, 0)));
    }
}
