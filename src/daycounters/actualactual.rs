use crate::date::{is_leap, Date};
use crate::months::Month;
use crate::types::{Integer, Time};

/// Actual/Actual day count convention per the ISDA definition, also known
/// as "Actual/Actual (Historical)" or "Act/Act".
///
/// Each calendar year contributes its actual days over its actual length
/// (365 or 366), so the fraction is the stub of the start year plus the
/// stub of the end year plus the number of whole years in between.
///
/// For worked examples, refer to
/// <https://www.isda.org/a/pIJEE/The-Actual-Actual-Day-Count-Fraction-1999.pdf>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActualActualIsda {}

impl ActualActualIsda {
    pub fn code(&self) -> &'static str {
        "ACT/ACT"
    }

    pub fn day_count(&self, start: Date, end: Date) -> Integer {
        end - start
    }

    pub fn year_fraction(&self, start: Date, end: Date) -> Time {
        if start == end {
            return 0.0;
        }
        let start_year = start.year();
        let end_year = end.year();
        let start_basis: Time = if is_leap(start_year) { 366.0 } else { 365.0 };
        let end_basis: Time = if is_leap(end_year) { 366.0 } else { 365.0 };

        let next_new_year = Date::new(1, Month::January, start_year + 1);
        let new_year = Date::new(1, Month::January, end_year);

        (next_new_year - start) as Time / start_basis
            + (end - new_year) as Time / end_basis
            + (end_year - start_year - 1) as Time
    }
}

// -------------------------------------------------------------------------------------------------
