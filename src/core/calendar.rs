use chrono::{Datelike, Days, NaiveDate};

/// Day `day` of `month` in `year`, carrying any excess past the month's end
/// into the following months, the way `mktime` treats an overflowing day.
///
/// Returns `None` for `month` outside 1..=12, `day == 0`, or a result outside
/// chrono's representable range.
pub fn normalize(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = day.checked_sub(1)?;
    first.checked_add_days(Days::new(u64::from(offset)))
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Every (month, day) of `year` in calendar order.
pub fn days_of_year(year: i32) -> impl Iterator<Item = (u32, u32)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1);
    start
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |date| date.year() == year)
        .map(|date| (date.month(), date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range() {
        assert_eq!(normalize(2015, 3, 21), NaiveDate::from_ymd_opt(2015, 3, 21));
        assert_eq!(normalize(2015, 12, 31), NaiveDate::from_ymd_opt(2015, 12, 31));
    }

    #[test]
    fn test_normalize_carries_overflow() {
        assert_eq!(normalize(2015, 4, 31), NaiveDate::from_ymd_opt(2015, 5, 1));
        assert_eq!(normalize(2015, 2, 29), NaiveDate::from_ymd_opt(2015, 3, 1));
        assert_eq!(normalize(2015, 2, 31), NaiveDate::from_ymd_opt(2015, 3, 3));
        assert_eq!(normalize(2016, 2, 29), NaiveDate::from_ymd_opt(2016, 2, 29));
    }

    #[test]
    fn test_normalize_rejects_structural_nonsense() {
        assert_eq!(normalize(2015, 0, 1), None);
        assert_eq!(normalize(2015, 13, 1), None);
        assert_eq!(normalize(2015, 1, 0), None);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2015, 2), Some(28));
        assert_eq!(days_in_month(2016, 2), Some(29));
        assert_eq!(days_in_month(2015, 4), Some(30));
        assert_eq!(days_in_month(2015, 12), Some(31));
        assert_eq!(days_in_month(2015, 13), None);
    }

    #[test]
    fn test_days_of_year() {
        assert_eq!(days_of_year(2015).count(), 365);
        assert_eq!(days_of_year(2016).count(), 366);
        assert_eq!(days_of_year(2015).next(), Some((1, 1)));
        assert_eq!(days_of_year(2015).last(), Some((12, 31)));
        assert!(!is_leap_year(2015));
        assert!(is_leap_year(2000));
    }
}
