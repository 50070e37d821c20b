use crate::calendar::{FinancialCalendar, Weekmask};
use crate::date::Date;
use crate::types::{Integer, Time};

/// Business/252 day count convention, used for Brazilian instruments: the
/// number of business days between the dates over a 252 day year.
///
/// Without a calendar the count falls back to a weekends-only working week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Business252 {}

impl Business252 {
    pub fn code(&self) -> &'static str {
        "252"
    }

    pub fn day_count(
        &self,
        start: Date,
        end: Date,
        calendar: Option<&FinancialCalendar>,
    ) -> Integer {
        match calendar {
            Some(calendar) => calendar.business_days_between(start, end),
            None => FinancialCalendar::new(Vec::new(), Weekmask::weekdays())
                .business_days_between(start, end),
        }
    }

    pub fn year_fraction(
        &self,
        start: Date,
        end: Date,
        calendar: Option<&FinancialCalendar>,
    ) -> Time {
        self.day_count(start, end, calendar) as Time / 252.0
    }
}

// -------------------------------------------------------------------------------------------------
