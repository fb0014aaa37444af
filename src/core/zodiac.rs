use crate::config::{DayOverflow, ResolverConfig};
use crate::core::calendar;
use crate::core::{MonthDay, Result, SignResolver, ZodiacSign};
use crate::utils::error::CalcError;
use crate::utils::validation::{validate_range, Validate};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading year, then month and day. ASCII digits only; searched,
/// not anchored.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[0-9]{4}-)?([0-9]{1,2})-([0-9]{1,2})").expect("date pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
    pub sign: ZodiacSign,
    pub start: MonthDay,
    pub end: MonthDay,
}

const fn range(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> SignRange {
    SignRange {
        sign,
        start: MonthDay::new(start.0, start.1),
        end: MonthDay::new(end.0, end.1),
    }
}

/// Inclusive boundaries. Capricorn spans the new year and takes two rows.
pub static SIGN_TABLE: [SignRange; 13] = [
    range(ZodiacSign::Capricorn, (12, 22), (12, 31)),
    range(ZodiacSign::Capricorn, (1, 1), (1, 20)),
    range(ZodiacSign::Aquarius, (1, 21), (2, 18)),
    range(ZodiacSign::Pisces, (2, 19), (3, 20)),
    range(ZodiacSign::Aries, (3, 21), (4, 19)),
    range(ZodiacSign::Taurus, (4, 20), (5, 20)),
    range(ZodiacSign::Gemini, (5, 21), (6, 21)),
    range(ZodiacSign::Cancer, (6, 22), (7, 22)),
    range(ZodiacSign::Leo, (7, 23), (8, 22)),
    range(ZodiacSign::Virgo, (8, 23), (9, 22)),
    range(ZodiacSign::Libra, (9, 23), (10, 23)),
    range(ZodiacSign::Scorpio, (10, 24), (11, 21)),
    range(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
];

#[derive(Debug, Clone, Copy)]
struct ResolvedRange {
    sign: ZodiacSign,
    start: NaiveDate,
    end: NaiveDate,
}

/// Maps `YYYY-MM-DD` or `MM-DD` text to a zodiac sign.
///
/// The table boundaries and the input are both turned into dates of the
/// configured reference year with the same overflow-carrying rule, so a day
/// past the end of its month lands wherever the carry puts it
/// (`04-31` resolves like `05-01`). Use [`DayOverflow::Reject`] to refuse such
/// days instead.
#[derive(Debug, Clone)]
pub struct ZodiacResolver {
    config: ResolverConfig,
    ranges: Vec<ResolvedRange>,
}

impl ZodiacResolver {
    pub fn new() -> Self {
        let config = ResolverConfig::default();
        let ranges = resolve_table(config.reference_year);
        Self { config, ranges }
    }

    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        let ranges = resolve_table(config.reference_year);
        if ranges.len() != SIGN_TABLE.len() {
            return Err(CalcError::ConfigError {
                field: "resolver.reference_year".to_string(),
                message: format!(
                    "sign table cannot be built for year {}",
                    config.reference_year
                ),
            });
        }
        Ok(Self { config, ranges })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves an already split month and day, applying the same range
    /// checks as [`SignResolver::resolve_sign`].
    pub fn resolve_month_day(&self, date: MonthDay) -> Result<ZodiacSign> {
        let MonthDay { month, day } = date;
        validate_range("Month", month, 1, 12)?;
        validate_range("Day", day, 1, 31)?;

        let year = self.config.reference_year;
        if self.config.day_overflow == DayOverflow::Reject {
            let last_day = calendar::days_in_month(year, month).unwrap_or(31);
            validate_range("Day", day, 1, last_day)?;
        }

        let instant =
            calendar::normalize(year, month, day).ok_or(CalcError::NoMatch { month, day })?;

        let sign = self
            .ranges
            .iter()
            .find(|range| range.start <= instant && instant <= range.end)
            .map(|range| range.sign)
            .ok_or(CalcError::NoMatch { month, day })?;

        tracing::debug!(%date, %sign, "resolved zodiac sign");
        Ok(sign)
    }
}

impl Default for ZodiacResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SignResolver for ZodiacResolver {
    fn resolve_sign(&self, input: &str) -> Result<ZodiacSign> {
        let date = parse_month_day(input)?;
        self.resolve_month_day(date)
    }
}

/// Extracts month and day from the first date-like fragment of `input`.
pub fn parse_month_day(input: &str) -> Result<MonthDay> {
    let malformed = || CalcError::MalformedInput {
        input: input.to_string(),
    };

    let caps = DATE_PATTERN.captures(input).ok_or_else(malformed)?;
    let month = caps[1].parse::<u32>().map_err(|_| malformed())?;
    let day = caps[2].parse::<u32>().map_err(|_| malformed())?;

    Ok(MonthDay::new(month, day))
}

fn resolve_table(year: i32) -> Vec<ResolvedRange> {
    SIGN_TABLE
        .iter()
        .filter_map(|row| {
            Some(ResolvedRange {
                sign: row.sign,
                start: calendar::normalize(year, row.start.month, row.start.day)?,
                end: calendar::normalize(year, row.end.month, row.end.day)?,
            })
        })
        .collect()
}
