use crate::date::Date;
use crate::types::{Integer, Time};

/// 30/365 day count convention: the bond basis 30-style numerator over a
/// 365 day year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thirty365 {}

impl Thirty365 {
    pub fn code(&self) -> &'static str {
        "30/365"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        let start_day = start.day_of_month() as Integer;
        let end_day = end.day_of_month() as Integer;
        let d1 = start_day.min(30);
        let d2 = if d1 < 30 { end_day } else { end_day.min(30) };
        360 * (end.year() - start.year())
            + 30 * (Integer::from(end.month()) - Integer::from(start.month()))
            + d2
            - d1
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 365.0
    }
}

// -------------------------------------------------------------------------------------------------
