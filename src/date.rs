use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::errors::Error;
use crate::months::Month;
use crate::period::Period;
use crate::timeunit::TimeUnit;
use crate::types::Integer;
use crate::weekday::Weekday;
use crate::{Day, Year};

// Days from 0001-01-01 (CE) to the 1970-01-01 epoch.
const EPOCH_DAYS_FROM_CE: Integer = 719_163;

/// A civil date, stored as a signed count of days since 1970-01-01.
///
/// There is no time-of-day and no timezone; a `Date` is a day of the
/// proleptic Gregorian calendar. Breakdown into day, month and year is
/// delegated to [chrono].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(Integer);

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive())
    }
}

// -------------------------------------------------------------------------------------------------

impl Date {
    /// Create a new [Date] from day of month, [Month] and year.
    pub fn new(d: Day, m: Month, y: Year) -> Self {
        let len = month_length(m, is_leap(y));
        assert!(
            d >= 1 && d <= len,
            "day {} outside month ({:?}) day-range [1, {}]",
            d,
            m,
            len
        );
        let naive = NaiveDate::from_ymd_opt(y, Integer::from(m) as u32, d)
            .unwrap_or_else(|| panic!("invalid civil date {:04}-{:?}-{:02}", y, m, d));
        Date(naive.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
    }

    /// Create a [Date] from a day count since 1970-01-01.
    pub fn from_days(days: Integer) -> Self {
        Date(days)
    }

    /// The day count since 1970-01-01.
    pub fn days(self) -> Integer {
        self.0
    }

    fn naive(self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0 + EPOCH_DAYS_FROM_CE)
            .unwrap_or_else(|| panic!("day count {} is out of the supported range", self.0))
    }

    pub fn day_of_month(self) -> Day {
        self.naive().day()
    }

    pub fn month(self) -> Month {
        (self.naive().month() as Integer).into()
    }

    pub fn year(self) -> Year {
        self.naive().year()
    }

    pub fn weekday(self) -> Weekday {
        // the epoch, 1970-01-01, was a Thursday
        Weekday::from((self.0 + 3).rem_euclid(7))
    }

    /// The number of whole months between 1970-01 and this date's month.
    pub fn month_index(self) -> Integer {
        let naive = self.naive();
        (naive.year() - 1970) * 12 + naive.month0() as Integer
    }

    /// The first day of the month `index` months after 1970-01.
    pub fn from_month_index(index: Integer) -> Self {
        let y = 1970 + index.div_euclid(12);
        let m = index.rem_euclid(12) + 1;
        Date::new(1, m.into(), y)
    }

    /// The first day of this date's month.
    pub fn truncate_to_month(self) -> Self {
        Date(self.0 - (self.day_of_month() as Integer - 1))
    }

    /// The last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let len = month_length(self.month(), is_leap(self.year()));
        self.truncate_to_month() + (len as Integer - 1)
    }

    pub fn is_end_of_month(self) -> bool {
        self.day_of_month() == month_length(self.month(), is_leap(self.year()))
    }

    /// Advance the date by the given number of time units. Month and year
    /// steps clamp the day of month to the length of the target month.
    pub fn advance(self, n: Integer, unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Days => self + n,
            TimeUnit::Weeks => self + 7 * n,
            TimeUnit::Months => {
                clamped_month_day(Date::from_month_index(self.month_index() + n), self.day_of_month())
            }
            TimeUnit::Years => clamped_month_day(
                Date::from_month_index(self.month_index() + 12 * n),
                self.day_of_month(),
            ),
        }
    }
}

// -------------------------------------------------------------------------------------------------

impl Add<Integer> for Date {
    type Output = Date;

    fn add(self, rhs: Integer) -> Self::Output {
        Date(self.0 + rhs)
    }
}

impl AddAssign<Integer> for Date {
    fn add_assign(&mut self, rhs: Integer) {
        self.0 += rhs;
    }
}

impl Sub<Integer> for Date {
    type Output = Date;

    fn sub(self, rhs: Integer) -> Self::Output {
        Date(self.0 - rhs)
    }
}

impl SubAssign<Integer> for Date {
    fn sub_assign(&mut self, rhs: Integer) {
        self.0 -= rhs;
    }
}

impl Sub for Date {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl Add<Period> for Date {
    type Output = Date;

    fn add(self, rhs: Period) -> Self::Output {
        self.advance(rhs.length, rhs.unit)
    }
}

impl Sub<Period> for Date {
    type Output = Date;

    fn sub(self, rhs: Period) -> Self::Output {
        self.advance(-rhs.length, rhs.unit)
    }
}

// -------------------------------------------------------------------------------------------------

impl From<NaiveDate> for Date {
    fn from(naive: NaiveDate) -> Self {
        Date(naive.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.naive()
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive: NaiveDate = s.parse().map_err(|_| Error::InvalidDate(s.to_string()))?;
        Ok(naive.into())
    }
}

// -------------------------------------------------------------------------------------------------

/// Gregorian leap year test.
pub fn is_leap(year: Year) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

/// Whether `date` is the last day of February, 28th or 29th depending on the
/// leap state of its year.
pub fn is_last_day_of_feb(date: Date) -> bool {
    date.month() == Month::February && date.day_of_month() == 28 + Day::from(is_leap(date.year()))
}

/// Length in days of month `m` from its number alone.
///
/// Outside February, months alternate between 31 and 30 days with the parity
/// of the month number, except that the alternation restarts at August:
/// July (7) and August (8) are both 31 days long, which is exactly what the
/// two-sided parity test below yields.
fn month_length(m: Month, leap: bool) -> Day {
    if m == Month::February {
        return if leap { 29 } else { 28 };
    }
    let m = Integer::from(m);
    if (m % 2 != 0 && m < 7) || (m % 2 == 0 && m > 7) {
        31
    } else {
        30
    }
}

/// Attach day-of-month `day` to a month anchor (the first day of a month),
/// clamping to the length of that month. Requests up to the 28th never need
/// the clamp and skip the month-length computation.
pub fn clamped_month_day(anchor: Date, day: Day) -> Date {
    if day <= 28 {
        return anchor + (day as Integer - 1);
    }
    let len = month_length(anchor.month(), is_leap(anchor.year()));
    anchor + (day.min(len) as Integer - 1)
}

/// Batch form of [clamped_month_day] over a slice of month anchors.
pub fn clamped_month_days(anchors: &[Date], day: Day) -> Vec<Date> {
    anchors.iter().map(|&a| clamped_month_day(a, day)).collect()
}

// -------------------------------------------------------------------------------------------------
