use crate::date::{is_leap, Date};
use crate::types::{Integer, Time};

/// ACT/360 day count convention, also known as "Actual/360" or "French".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actual360 {}

impl Actual360 {
    pub fn code(&self) -> &'static str {
        "ACT/360"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        end - start
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// -------------------------------------------------------------------------------------------------

/// ACT/365 day count convention, also known as "Actual/365 (Fixed)".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actual365 {}

impl Actual365 {
    pub fn code(&self) -> &'static str {
        "ACT/365"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        end - start
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 365.0
    }
}

// -------------------------------------------------------------------------------------------------

/// NL/365 day count convention ("no leap"): the actual day count less one
/// day for each endpoint year that is a leap year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nl365 {}

impl Nl365 {
    pub fn code(&self) -> &'static str {
        "NL/365"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        (end - start) - Integer::from(is_leap(start.year())) - Integer::from(is_leap(end.year()))
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 365.0
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{Actual360, Actual365, Nl365};
    use crate::date::Date;
    use crate::months::Month::*;

    #[test]
    fn test_actual_360() {
        let dc = Actual360 {};
        let start = Date::new(1, January, 2020);
        let end = Date::new(1, January, 2021);
        assert_eq!(dc.day_count(start, end), 366);
        assert!((dc.year_fraction(start, end) - 366.0 / 360.0).abs() <= 1.0e-10);
        assert_eq!(dc.day_count(start, start), 0);
        assert_eq!(dc.day_count(end, start), -366);
    }

    #[test]
    fn test_actual_365() {
        let dc = Actual365 {};
        let start = Date::new(15, February, 2023);
        let end = Date::new(30, September, 2023);
        assert_eq!(dc.day_count(start, end), 227);
        assert!((dc.year_fraction(start, end) - 227.0 / 365.0).abs() <= 1.0e-10);
    }

    #[test]
    fn test_nl_365() {
        let dc = Nl365 {};
        // neither endpoint year is leap
        let start = Date::new(15, January, 2021);
        let end = Date::new(15, January, 2022);
        assert_eq!(dc.day_count(start, end), 365);
        // one leap endpoint year subtracts one day
        let start = Date::new(15, January, 2020);
        let end = Date::new(15, January, 2021);
        assert_eq!(dc.day_count(start, end), 366 - 1);
        // leap years at both ends subtract two
        let start = Date::new(15, January, 2020);
        let end = Date::new(15, January, 2024);
        assert_eq!(dc.day_count(start, end), 1461 - 2);
    }
}
