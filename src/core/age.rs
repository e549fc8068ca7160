//! Calendar-aware age arithmetic.

use chrono::{Datelike, NaiveDate};

/// Whole years between `dob` and `today`.
///
/// The year difference is decremented when `today`'s month/day falls before
/// the birth month/day.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Date of birth for someone who turns `years` today: same month and day as
/// `today`, `years` years earlier.
///
/// Returns `None` when that date does not exist (Feb 29 in a common year) or
/// falls outside the representable range.
pub fn backdate_by_years(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    let years = i32::try_from(years).ok()?;
    let year = today.year().checked_sub(years)?;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_on(date(2000, 6, 16), date(2024, 6, 15)), 23);
        assert_eq!(age_on(date(2000, 7, 1), date(2024, 6, 15)), 23);
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age_on(date(2000, 6, 14), date(2024, 6, 15)), 24);
        assert_eq!(age_on(date(2000, 1, 1), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_leap_day_birth() {
        // Feb 29 birthdays tick over on Mar 1 in common years.
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_backdate() {
        let today = date(2026, 10, 18);
        assert_eq!(backdate_by_years(today, 30), Some(date(1996, 10, 18)));
        assert_eq!(backdate_by_years(today, 0), Some(today));
        assert_eq!(age_on(backdate_by_years(today, 42).unwrap(), today), 42);
    }

    #[test]
    fn test_backdate_invalid() {
        assert_eq!(backdate_by_years(date(2024, 2, 29), 1), None);
        assert_eq!(backdate_by_years(date(2024, 2, 29), 4), Some(date(2020, 2, 29)));
        assert_eq!(backdate_by_years(date(2024, 1, 1), u32::MAX), None);
        assert_eq!(backdate_by_years(date(2024, 1, 1), 1_000_000), None);
    }
}
