//! Date and time predicates

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::foundation::{Verifier, VerifyResult};
use crate::message::{Debugged, keys};

/// Points in time with a calendar date.
pub trait Temporal: PartialOrd + fmt::Debug {
    /// The calendar date, in the value's own time zone.
    fn calendar_date(&self) -> NaiveDate;
}

impl Temporal for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl Temporal for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> Temporal for DateTime<Tz>
where
    Tz::Offset: fmt::Debug,
{
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Predicates for dates and timestamps.
pub trait TemporalVerify: Sized {
    /// The point-in-time type.
    type Instant;

    /// Verifies that the subject is strictly earlier than `other`.
    fn before(self, other: &Self::Instant) -> VerifyResult<Self>;

    /// Verifies that the subject is strictly later than `other`.
    fn after(self, other: &Self::Instant) -> VerifyResult<Self>;

    /// Verifies that the subject falls on the same calendar date as `other`.
    fn same_day_as(self, other: &Self::Instant) -> VerifyResult<Self>;

    /// Verifies that the subject falls on `day`.
    fn weekday(self, day: Weekday) -> VerifyResult<Self>;

    /// Verifies that the subject falls on a Saturday or Sunday.
    fn weekend(self) -> VerifyResult<Self>;

    /// Verifies that the subject's year is a leap year.
    fn leap_year(self) -> VerifyResult<Self>;

    /// Verifies that the subject falls in `year`.
    fn year(self, year: i32) -> VerifyResult<Self>;
}

impl<T: Temporal> TemporalVerify for Verifier<T> {
    type Instant = T;

    fn before(self, other: &T) -> VerifyResult<Self> {
        let result = self.value() < other;
        self.check_key(result, keys::BEFORE, &[&Debugged(other)])
    }

    fn after(self, other: &T) -> VerifyResult<Self> {
        let result = self.value() > other;
        self.check_key(result, keys::AFTER, &[&Debugged(other)])
    }

    fn same_day_as(self, other: &T) -> VerifyResult<Self> {
        let day = other.calendar_date();
        let result = self.value().calendar_date() == day;
        self.check_key(result, keys::SAME_DAY_AS, &[&day])
    }

    fn weekday(self, day: Weekday) -> VerifyResult<Self> {
        let result = self.value().calendar_date().weekday() == day;
        self.check_key(result, keys::WEEKDAY, &[&day])
    }

    fn weekend(self) -> VerifyResult<Self> {
        let result = matches!(
            self.value().calendar_date().weekday(),
            Weekday::Sat | Weekday::Sun
        );
        self.check_key(result, keys::WEEKEND, &[])
    }

    fn leap_year(self) -> VerifyResult<Self> {
        let year = self.value().calendar_date().year();
        let result = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        self.check_key(result, keys::LEAP_YEAR, &[])
    }

    fn year(self, year: i32) -> VerifyResult<Self> {
        let result = self.value().calendar_date().year() == year;
        self.check_key(result, keys::YEAR, &[&year])
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc, Weekday};
    use rstest::rstest;

    use crate::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordering() {
        let new_year = date(2024, 1, 1);
        assert!(verify(date(2023, 12, 31)).before(&new_year).is_ok());
        assert!(verify(new_year).before(&new_year).is_err());
        assert!(verify(date(2024, 1, 2)).after(&new_year).is_ok());
    }

    #[test]
    fn test_same_day_ignores_time() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 6, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 3, 9, 22, 30, 0).unwrap();
        assert!(verify(morning).same_day_as(&evening).is_ok());

        let err = verify(morning.naive_utc())
            .same_day_as(&date(2024, 3, 10).and_hms_opt(0, 0, 0).unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), "value must be same day as 2024-03-10");
    }

    #[rstest]
    #[case(date(2024, 3, 9), Weekday::Sat, true)]
    #[case(date(2024, 3, 10), Weekday::Sun, true)]
    #[case(date(2024, 3, 11), Weekday::Mon, false)]
    fn test_weekday_and_weekend(
        #[case] day: NaiveDate,
        #[case] weekday: Weekday,
        #[case] weekend: bool,
    ) {
        assert!(verify(day).weekday(weekday).is_ok());
        assert_eq!(verify(day).weekend().is_ok(), weekend);
    }

    #[test]
    fn test_weekday_message() {
        let err = verify(date(2024, 3, 11)).weekday(Weekday::Fri).unwrap_err();
        assert_eq!(err.to_string(), "value must be on a Fri");
    }

    #[rstest]
    #[case(2024, true)]
    #[case(2000, true)]
    #[case(1900, false)]
    #[case(2023, false)]
    fn test_leap_year(#[case] year: i32, #[case] leap: bool) {
        assert_eq!(verify(date(year, 6, 1)).leap_year().is_ok(), leap);
        assert!(verify(date(year, 6, 1)).year(year).is_ok());
    }
}
