use crate::calendar::FinancialCalendar;
use crate::date::Date;
use crate::daycounters::actual::{Actual360, Actual365, Nl365};
use crate::daycounters::actualactual::ActualActualIsda;
use crate::daycounters::business252::Business252;
use crate::daycounters::one::One;
use crate::daycounters::thirty360::{Thirty360, ThirtyE360, ThirtyE360Isda, ThirtyU360};
use crate::daycounters::thirty365::Thirty365;
use crate::errors::Error;
use crate::types::{Integer, Size, Time};

/// A scalar date or a slice of dates, the input shape of the vectorised day
/// counter entry points.
///
/// A scalar broadcasts against a slice of any length; two slices must have
/// equal length or the operation fails with [Error::ShapeMismatch].
#[derive(Clone, Copy, Debug)]
pub enum DateSpan<'a> {
    Scalar(Date),
    Many(&'a [Date]),
}

impl DateSpan<'_> {
    fn len(&self) -> Option<Size> {
        match self {
            DateSpan::Scalar(_) => None,
            DateSpan::Many(dates) => Some(dates.len()),
        }
    }

    fn get(&self, index: Size) -> Date {
        match self {
            DateSpan::Scalar(date) => *date,
            DateSpan::Many(dates) => dates[index],
        }
    }
}

impl From<Date> for DateSpan<'static> {
    fn from(date: Date) -> Self {
        DateSpan::Scalar(date)
    }
}

impl<'a> From<&'a [Date]> for DateSpan<'a> {
    fn from(dates: &'a [Date]) -> Self {
        DateSpan::Many(dates)
    }
}

impl<'a> From<&'a Vec<Date>> for DateSpan<'a> {
    fn from(dates: &'a Vec<Date>) -> Self {
        DateSpan::Many(dates)
    }
}

fn broadcast_len(starts: &DateSpan, ends: &DateSpan) -> Result<Size, Error> {
    match (starts.len(), ends.len()) {
        (None, None) => Ok(1),
        (Some(n), None) | (None, Some(n)) => Ok(n),
        (Some(left), Some(right)) if left == right => Ok(left),
        (Some(left), Some(right)) => Err(Error::ShapeMismatch { left, right }),
    }
}

// -------------------------------------------------------------------------------------------------

/// The day count conventions, dispatching to one variant struct per
/// convention without boxing.
///
/// Every counter maps a pair of dates to an integer day count and a year
/// fraction. Only Business/252 consults the optional calendar; the other
/// counters ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayCounter {
    Actual360(Actual360),
    Actual365(Actual365),
    Nl365(Nl365),
    Business252(Business252),
    ActualActualIsda(ActualActualIsda),
    Thirty360(Thirty360),
    Thirty365(Thirty365),
    ThirtyE360(ThirtyE360),
    ThirtyE360Isda(ThirtyE360Isda),
    ThirtyU360(ThirtyU360),
    One(One),
}

impl DayCounter {
    pub fn actual_360() -> Self {
        Self::Actual360(Actual360 {})
    }

    pub fn actual_365() -> Self {
        Self::Actual365(Actual365 {})
    }

    pub fn nl_365() -> Self {
        Self::Nl365(Nl365 {})
    }

    pub fn business_252() -> Self {
        Self::Business252(Business252 {})
    }

    pub fn actual_actual_isda() -> Self {
        Self::ActualActualIsda(ActualActualIsda {})
    }

    pub fn thirty_360() -> Self {
        Self::Thirty360(Thirty360 {})
    }

    pub fn thirty_365() -> Self {
        Self::Thirty365(Thirty365 {})
    }

    pub fn thirty_e_360() -> Self {
        Self::ThirtyE360(ThirtyE360 {})
    }

    /// `is_end_date_on_termination` skips the February-end rule for the end
    /// date of the accrual period that ends on the contract's termination
    /// date.
    pub fn thirty_e_360_isda(is_end_date_on_termination: bool) -> Self {
        Self::ThirtyE360Isda(ThirtyE360Isda {
            is_end_date_on_termination,
        })
    }

    pub fn thirty_u_360() -> Self {
        Self::ThirtyU360(ThirtyU360 {})
    }

    pub fn one() -> Self {
        Self::One(One {})
    }

    /// The market identifier of the convention.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Actual360(c) => c.code(),
            Self::Actual365(c) => c.code(),
            Self::Nl365(c) => c.code(),
            Self::Business252(c) => c.code(),
            Self::ActualActualIsda(c) => c.code(),
            Self::Thirty360(c) => c.code(),
            Self::Thirty365(c) => c.code(),
            Self::ThirtyE360(c) => c.code(),
            Self::ThirtyE360Isda(c) => c.code(),
            Self::ThirtyU360(c) => c.code(),
            Self::One(c) => c.code(),
        }
    }

    /// The number of days between two dates under the convention, negative
    /// when `end` is before `start`.
    pub fn day_count(
        &self,
        start: Date,
        end: Date,
        calendar: Option<&FinancialCalendar>,
    ) -> Integer {
        match self {
            Self::Actual360(c) => c.day_count(start, end),
            Self::Actual365(c) => c.day_count(start, end),
            Self::Nl365(c) => c.day_count(start, end),
            Self::Business252(c) => c.day_count(start, end, calendar),
            Self::ActualActualIsda(c) => c.day_count(start, end),
            Self::Thirty360(c) => c.day_count(start, end),
            Self::Thirty365(c) => c.day_count(start, end),
            Self::ThirtyE360(c) => c.day_count(start, end),
            Self::ThirtyE360Isda(c) => c.day_count(start, end),
            Self::ThirtyU360(c) => c.day_count(start, end),
            Self::One(c) => c.day_count(start, end),
        }
    }

    /// The fraction of a year between two dates under the convention.
    pub fn year_fraction(
        &self,
        start: Date,
        end: Date,
        calendar: Option<&FinancialCalendar>,
    ) -> Time {
        match self {
            Self::Actual360(c) => c.year_fraction(start, end),
            Self::Actual365(c) => c.year_fraction(start, end),
            Self::Nl365(c) => c.year_fraction(start, end),
            Self::Business252(c) => c.year_fraction(start, end, calendar),
            Self::ActualActualIsda(c) => c.year_fraction(start, end),
            Self::Thirty360(c) => c.year_fraction(start, end),
            Self::Thirty365(c) => c.year_fraction(start, end),
            Self::ThirtyE360(c) => c.year_fraction(start, end),
            Self::ThirtyE360Isda(c) => c.year_fraction(start, end),
            Self::ThirtyU360(c) => c.year_fraction(start, end),
            Self::One(c) => c.year_fraction(start, end),
        }
    }

    /// Whether the year fraction is summable across a partition of the
    /// interval: `yf(a, c) == yf(a, b) + yf(b, c)` for `a <= b <= c`.
    pub fn is_additive(&self) -> bool {
        matches!(
            self,
            Self::Actual360(_)
                | Self::Actual365(_)
                | Self::Business252(_)
                | Self::ActualActualIsda(_)
                | Self::One(_)
        )
    }

    /// Vectorised day count with numpy-style broadcasting: a scalar input
    /// is repeated to the shape of the other side.
    pub fn day_count_many(
        &self,
        starts: DateSpan,
        ends: DateSpan,
        calendar: Option<&FinancialCalendar>,
    ) -> Result<Vec<Integer>, Error> {
        let len = broadcast_len(&starts, &ends)?;
        Ok((0..len)
            .map(|i| self.day_count(starts.get(i), ends.get(i), calendar))
            .collect())
    }

    /// Vectorised year fraction with the same broadcasting rules as
    /// [day_count_many](Self::day_count_many).
    pub fn year_fraction_many(
        &self,
        starts: DateSpan,
        ends: DateSpan,
        calendar: Option<&FinancialCalendar>,
    ) -> Result<Vec<Time>, Error> {
        let len = broadcast_len(&starts, &ends)?;
        Ok((0..len)
            .map(|i| self.year_fraction(starts.get(i), ends.get(i), calendar))
            .collect())
    }
}

// -------------------------------------------------------------------------------------------------
