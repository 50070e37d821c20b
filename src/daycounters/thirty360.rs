use crate::date::{is_last_day_of_feb, Date};
use crate::types::{Integer, Time};

/// The 30-style numerator shared by every counter in this family:
/// each month contributes 30 days after the endpoint days of month have
/// been remapped by the convention at hand.
fn thirty_numerator(start: Date, end: Date, d1: Integer, d2: Integer) -> Integer {
    360 * (end.year() - start.year())
        + 30 * (Integer::from(end.month()) - Integer::from(start.month()))
        + d2
        - d1
}

// -------------------------------------------------------------------------------------------------

/// 30/360 day count convention, bond basis (also "US (ISMA)"): the start
/// day is capped at 30, and the end day only when the start day was capped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thirty360 {}

impl Thirty360 {
    pub fn code(&self) -> &'static str {
        "30/360"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        let start_day = start.day_of_month() as Integer;
        let end_day = end.day_of_month() as Integer;
        let d1 = start_day.min(30);
        let d2 = if d1 < 30 { end_day } else { end_day.min(30) };
        thirty_numerator(start, end, d1, d2)
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// -------------------------------------------------------------------------------------------------

/// 30E/360 day count convention ("Eurobond Basis"): both endpoint days are
/// capped at 30 unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThirtyE360 {}

impl ThirtyE360 {
    pub fn code(&self) -> &'static str {
        "30E/360"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        let d1 = (start.day_of_month() as Integer).min(30);
        let d2 = (end.day_of_month() as Integer).min(30);
        thirty_numerator(start, end, d1, d2)
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// -------------------------------------------------------------------------------------------------

/// 30E/360 day count convention per the ISDA definition (also "30/360
/// German"): the 31st and the last day of February both count as the 30th.
///
/// `is_end_date_on_termination` disables the February rule for the end
/// date, for the accrual period that ends on the contract's termination
/// date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThirtyE360Isda {
    pub is_end_date_on_termination: bool,
}

impl ThirtyE360Isda {
    pub fn code(&self) -> &'static str {
        "30E/360ISDA"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        let start_day = start.day_of_month() as Integer;
        let end_day = end.day_of_month() as Integer;
        let d1 = if start_day == 31 || is_last_day_of_feb(start) {
            30
        } else {
            start_day
        };
        let d2 = if end_day == 31 || (is_last_day_of_feb(end) && !self.is_end_date_on_termination) {
            30
        } else {
            end_day
        };
        thirty_numerator(start, end, d1, d2)
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// -------------------------------------------------------------------------------------------------

/// 30U/360 day count convention (USA): end-of-February start dates count as
/// the 30th, and the end day is capped when the start was at month end.
///
/// The February test in the end-day clause looks at the *start* date twice;
/// this asymmetry matches the USA convention and is deliberate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThirtyU360 {}

impl ThirtyU360 {
    pub fn code(&self) -> &'static str {
        "30U/360"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        let start_day = start.day_of_month() as Integer;
        let end_day = end.day_of_month() as Integer;
        let start_feb_end = is_last_day_of_feb(start);
        let start_at_month_end = start_day >= 30 || start_feb_end;
        let d1 = if start_at_month_end { 30 } else { start_day };
        let d2 = if (end_day == 31 && start_at_month_end)
            || (start_feb_end && is_last_day_of_feb(end))
        {
            30
        } else {
            end_day
        };
        thirty_numerator(start, end, d1, d2)
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// -------------------------------------------------------------------------------------------------
