use std::fmt;
use std::str::FromStr;

use crate::businessdayconvention::BusinessDayConvention;
use crate::date::{clamped_month_day, Date};
use crate::errors::Error;
use crate::period::Period;
use crate::timeunit::TimeUnit;
use crate::types::Integer;
use crate::weekday::Weekday;

/// A repeating 7-day pattern identifying which weekdays are business days,
/// Monday first. `true` marks a working day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weekmask([bool; 7]);

impl Weekmask {
    pub fn new(mask: [bool; 7]) -> Self {
        Weekmask(mask)
    }

    /// The Monday-to-Friday working week.
    pub fn weekdays() -> Self {
        Weekmask([true, true, true, true, true, false, false])
    }

    pub fn is_working(self, weekday: Weekday) -> bool {
        self.0[weekday as usize]
    }

    fn has_business_day(self) -> bool {
        self.0.iter().any(|&working| working)
    }
}

/// All seven days are business days, matching the behavior of a calendar
/// built without an explicit weekmask.
impl Default for Weekmask {
    fn default() -> Self {
        Weekmask([true; 7])
    }
}

impl FromStr for Weekmask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 7 {
            return Err(Error::WeekmaskLength(count));
        }
        let mut mask = [false; 7];
        for (slot, c) in mask.iter_mut().zip(s.chars()) {
            *slot = match c {
                '1' => true,
                '0' => false,
                other => return Err(Error::WeekmaskChar(other)),
            };
        }
        Ok(Weekmask(mask))
    }
}

impl TryFrom<&[bool]> for Weekmask {
    type Error = Error;

    fn try_from(mask: &[bool]) -> Result<Self, Self::Error> {
        let mask: [bool; 7] = mask
            .try_into()
            .map_err(|_| Error::WeekmaskLength(mask.len()))?;
        Ok(Weekmask(mask))
    }
}

impl fmt::Display for Weekmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &working in &self.0 {
            write!(f, "{}", if working { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

/// A trading calendar: a weekmask plus a set of holiday dates.
///
/// A date is a business day iff its weekday is working under the weekmask
/// and the date is not a holiday. Calendars are immutable after construction
/// and can be shared freely across threads for concurrent reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinancialCalendar {
    holidays: Vec<Date>,
    weekmask: Weekmask,
}

impl FinancialCalendar {
    /// Build a calendar from a holiday list and a weekmask. Holidays are
    /// sorted and deduplicated; the weekmask must admit at least one
    /// business day per week.
    pub fn new(mut holidays: Vec<Date>, weekmask: Weekmask) -> Self {
        assert!(
            weekmask.has_business_day(),
            "weekmask {} has no business day",
            weekmask
        );
        holidays.sort_unstable();
        holidays.dedup();
        Self { holidays, weekmask }
    }

    /// Build a calendar with the default all-days-working weekmask.
    pub fn from_holidays(holidays: Vec<Date>) -> Self {
        Self::new(holidays, Weekmask::default())
    }

    /// Build a calendar from ISO-8601 holiday literals.
    pub fn from_iso_holidays<'a, I>(holidays: I, weekmask: Weekmask) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let holidays = holidays
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Date>, Error>>()?;
        Ok(Self::new(holidays, weekmask))
    }

    /// The holiday dates, sorted and unique.
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }

    pub fn weekmask(&self) -> Weekmask {
        self.weekmask
    }

    /// Returns `true` iff the date is a business day under this calendar.
    pub fn is_business_day(&self, date: Date) -> bool {
        self.weekmask.is_working(date.weekday()) && self.holidays.binary_search(&date).is_err()
    }

    /// The earliest business day on or after `date`.
    fn next_business_day(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date += 1;
        }
        date
    }

    /// The latest business day on or before `date`.
    fn previous_business_day(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date -= 1;
        }
        date
    }

    /// Roll `date` to a business day under the given convention. Business
    /// days are returned unchanged.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        if convention == BusinessDayConvention::Unadjusted || self.is_business_day(date) {
            return date;
        }
        match convention {
            BusinessDayConvention::Following => self.next_business_day(date),
            BusinessDayConvention::Preceding => self.previous_business_day(date),
            BusinessDayConvention::ModifiedFollowing => {
                let following = self.next_business_day(date);
                if following.month() != date.month() {
                    self.previous_business_day(date)
                } else {
                    following
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let preceding = self.previous_business_day(date);
                if preceding.month() != date.month() {
                    self.next_business_day(date)
                } else {
                    preceding
                }
            }
            BusinessDayConvention::Unadjusted => date,
        }
    }

    /// Add a calendar period to `date`, then roll the result under `roll`.
    ///
    /// Day and week periods are plain day addition. Month and year periods
    /// truncate to the month, shift, and re-attach the day of month clamped
    /// to the length of the target month.
    pub fn offset(&self, date: Date, period: Period, roll: BusinessDayConvention) -> Date {
        let moved = match period.unit {
            TimeUnit::Days => date + period.length,
            TimeUnit::Weeks => date + 7 * period.length,
            TimeUnit::Months => clamped_month_day(
                Date::from_month_index(date.month_index() + period.length),
                date.day_of_month(),
            ),
            TimeUnit::Years => clamped_month_day(
                Date::from_month_index(date.month_index() + 12 * period.length),
                date.day_of_month(),
            ),
        };
        self.adjust(moved, roll)
    }

    /// Batch form of [offset](Self::offset) over a slice of dates.
    pub fn offset_many(
        &self,
        dates: &[Date],
        period: Period,
        roll: BusinessDayConvention,
    ) -> Vec<Date> {
        dates.iter().map(|&d| self.offset(d, period, roll)).collect()
    }

    /// Advance `date` by `count` business days (not calendar days).
    ///
    /// The date is first rolled onto a business day — `Unadjusted`
    /// degenerates to `Following` — and then stepped `count` business days,
    /// backwards when `count` is negative.
    pub fn working_days_offset(
        &self,
        date: Date,
        count: Integer,
        roll: BusinessDayConvention,
    ) -> Date {
        let roll = if roll == BusinessDayConvention::Unadjusted {
            BusinessDayConvention::Following
        } else {
            roll
        };
        let mut current = self.adjust(date, roll);
        if count >= 0 {
            for _ in 0..count {
                current = self.next_business_day(current + 1);
            }
        } else {
            for _ in 0..-count {
                current = self.previous_business_day(current - 1);
            }
        }
        current
    }

    /// Batch form of [working_days_offset](Self::working_days_offset).
    pub fn working_days_offset_many(
        &self,
        dates: &[Date],
        count: Integer,
        roll: BusinessDayConvention,
    ) -> Vec<Date> {
        dates
            .iter()
            .map(|&d| self.working_days_offset(d, count, roll))
            .collect()
    }

    /// The number of business days in `[start, end)`. Negative when `end`
    /// is before `start`.
    pub fn business_days_between(&self, start: Date, end: Date) -> Integer {
        if end < start {
            return -self.business_days_between(end, start);
        }
        let mut count = 0;
        let mut date = start;
        while date < end {
            if self.is_business_day(date) {
                count += 1;
            }
            date += 1;
        }
        count
    }
}

// -------------------------------------------------------------------------------------------------

/// Combine calendars: a weekday is working only if every calendar works it,
/// and the holiday set is the union of all holiday sets.
pub fn join_calendars(calendars: &[FinancialCalendar]) -> Result<FinancialCalendar, Error> {
    let first = calendars.first().ok_or(Error::NoCalendars)?;
    let mut mask = first.weekmask.0;
    let mut holidays = first.holidays.clone();
    for calendar in &calendars[1..] {
        for (slot, &working) in mask.iter_mut().zip(&calendar.weekmask.0) {
            *slot &= working;
        }
        holidays.extend_from_slice(&calendar.holidays);
    }
    Ok(FinancialCalendar::new(holidays, Weekmask(mask)))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{join_calendars, FinancialCalendar, Weekmask};
    use crate::businessdayconvention::BusinessDayConvention::*;
    use crate::date::Date;
    use crate::months::Month::*;
    use crate::period::Period;
    use crate::timeunit::TimeUnit::*;

    fn weekend_calendar() -> FinancialCalendar {
        FinancialCalendar::new(vec![], Weekmask::weekdays())
    }

    fn uk_december() -> FinancialCalendar {
        FinancialCalendar::new(
            vec![Date::new(25, December, 2023), Date::new(26, December, 2023)],
            Weekmask::weekdays(),
        )
    }

    #[test]
    fn test_weekmask_parsing() {
        let mask: Weekmask = "1111100".parse().unwrap();
        assert_eq!(mask, Weekmask::weekdays());
        assert_eq!(mask.to_string(), "1111100");
        assert!("111110".parse::<Weekmask>().is_err());
        assert!("11111001".parse::<Weekmask>().is_err());
        assert!("11111x0".parse::<Weekmask>().is_err());
        assert_eq!(Weekmask::default().to_string(), "1111111");
    }

    #[test]
    fn test_is_business_day() {
        let calendar = uk_december();
        // 2023-12-22 was a Friday
        assert!(calendar.is_business_day(Date::new(22, December, 2023)));
        // weekend
        assert!(!calendar.is_business_day(Date::new(23, December, 2023)));
        assert!(!calendar.is_business_day(Date::new(24, December, 2023)));
        // holidays
        assert!(!calendar.is_business_day(Date::new(25, December, 2023)));
        assert!(!calendar.is_business_day(Date::new(26, December, 2023)));
        assert!(calendar.is_business_day(Date::new(27, December, 2023)));
    }

    #[test]
    fn test_holidays_sorted_and_unique() {
        let calendar = FinancialCalendar::new(
            vec![
                Date::new(26, December, 2023),
                Date::new(25, December, 2023),
                Date::new(26, December, 2023),
            ],
            Weekmask::weekdays(),
        );
        assert_eq!(
            calendar.holidays(),
            &[Date::new(25, December, 2023), Date::new(26, December, 2023)]
        );
    }

    #[test]
    fn test_adjust() {
        let calendar = uk_december();
        let saturday = Date::new(23, December, 2023);
        assert_eq!(calendar.adjust(saturday, Unadjusted), saturday);
        assert_eq!(calendar.adjust(saturday, Following), Date::new(27, December, 2023));
        assert_eq!(calendar.adjust(saturday, Preceding), Date::new(22, December, 2023));
        // business days are never moved
        let friday = Date::new(22, December, 2023);
        for convention in [Following, ModifiedFollowing, Preceding, ModifiedPreceding, Unadjusted] {
            assert_eq!(calendar.adjust(friday, convention), friday);
        }
    }

    #[test]
    fn test_modified_conventions_stay_in_month() {
        let calendar = weekend_calendar();
        // 2023-09-30 is a Saturday; following would cross into October
        let eom = Date::new(30, September, 2023);
        assert_eq!(calendar.adjust(eom, Following), Date::new(2, October, 2023));
        assert_eq!(calendar.adjust(eom, ModifiedFollowing), Date::new(29, September, 2023));
        // 2023-10-01 is a Sunday; preceding would cross back into September
        let bom = Date::new(1, October, 2023);
        assert_eq!(calendar.adjust(bom, Preceding), Date::new(29, September, 2023));
        assert_eq!(calendar.adjust(bom, ModifiedPreceding), Date::new(2, October, 2023));
    }

    #[test]
    fn test_offset_months_clamp() {
        let calendar = weekend_calendar();
        let d = Date::new(31, January, 2020);
        assert_eq!(
            calendar.offset(d, Period::new(1, Months), Unadjusted),
            Date::new(29, February, 2020)
        );
        assert_eq!(
            calendar.offset(d, Period::new(3, Months), Unadjusted),
            Date::new(30, April, 2020)
        );
        assert_eq!(
            calendar.offset(d, Period::new(1, Years), Unadjusted),
            Date::new(31, January, 2021)
        );
        // day and week offsets are plain addition before the roll
        assert_eq!(
            calendar.offset(d, Period::new(1, Days), Unadjusted),
            Date::new(1, February, 2020)
        );
        // 2020-02-29 is a Saturday
        assert_eq!(
            calendar.offset(d, Period::new(1, Months), Following),
            Date::new(2, March, 2020)
        );
        assert_eq!(
            calendar.offset(d, Period::new(1, Months), ModifiedFollowing),
            Date::new(28, February, 2020)
        );
    }

    #[test]
    fn test_offset_zero_is_adjust() {
        let calendar = weekend_calendar();
        let sunday = Date::new(30, April, 2023);
        assert_eq!(calendar.offset(sunday, Period::new(0, Days), Unadjusted), sunday);
        assert!(calendar.offset(sunday, Period::new(0, Days), Following) >= sunday);
        assert!(calendar.offset(sunday, Period::new(0, Days), Preceding) <= sunday);
    }

    #[test]
    fn test_working_days_offset() {
        let calendar = uk_december();
        // 2023-12-21 is a Thursday; +3 business days skips the weekend
        // and both holidays
        let d = Date::new(21, December, 2023);
        assert_eq!(calendar.working_days_offset(d, 1, Following), Date::new(22, December, 2023));
        assert_eq!(calendar.working_days_offset(d, 2, Following), Date::new(27, December, 2023));
        assert_eq!(calendar.working_days_offset(d, -1, Following), Date::new(20, December, 2023));
        // starting on a non-business day rolls first, Unadjusted degenerating
        // to Following
        let saturday = Date::new(23, December, 2023);
        assert_eq!(
            calendar.working_days_offset(saturday, 0, Unadjusted),
            Date::new(27, December, 2023)
        );
        assert_eq!(
            calendar.working_days_offset(saturday, 1, Unadjusted),
            Date::new(28, December, 2023)
        );
        assert_eq!(
            calendar.working_days_offset(saturday, 0, Preceding),
            Date::new(22, December, 2023)
        );
    }

    #[test]
    fn test_from_iso_holidays() {
        let calendar = FinancialCalendar::from_iso_holidays(
            ["2023-12-26", "2023-12-25"],
            Weekmask::weekdays(),
        )
        .unwrap();
        assert_eq!(
            calendar.holidays(),
            &[Date::new(25, December, 2023), Date::new(26, December, 2023)]
        );
        assert!(FinancialCalendar::from_iso_holidays(["2023-13-40"], Weekmask::weekdays()).is_err());
    }

    #[test]
    fn test_batch_offsets() {
        let calendar = weekend_calendar();
        let dates = vec![Date::new(31, January, 2020), Date::new(15, April, 2020)];
        assert_eq!(
            calendar.offset_many(&dates, Period::new(1, Months), Unadjusted),
            vec![Date::new(29, February, 2020), Date::new(15, May, 2020)]
        );
        assert_eq!(
            calendar.working_days_offset_many(&dates, 1, Following),
            vec![
                calendar.working_days_offset(dates[0], 1, Following),
                calendar.working_days_offset(dates[1], 1, Following),
            ]
        );
    }

    #[test]
    fn test_business_days_between() {
        let calendar = uk_december();
        let start = Date::new(22, December, 2023);
        let end = Date::new(29, December, 2023);
        // 22, 27, 28 — the interval is half-open
        assert_eq!(calendar.business_days_between(start, end), 3);
        assert_eq!(calendar.business_days_between(end, start), -3);
        assert_eq!(calendar.business_days_between(start, start), 0);
    }

    #[test]
    fn test_join_calendars() {
        let c1 = FinancialCalendar::new(
            vec![Date::new(25, December, 2023)],
            "1111110".parse().unwrap(),
        );
        let c2 = FinancialCalendar::new(
            vec![Date::new(26, December, 2023), Date::new(25, December, 2023)],
            "1111101".parse().unwrap(),
        );
        let joined = join_calendars(&[c1.clone(), c2]).unwrap();
        assert_eq!(joined.weekmask(), Weekmask::weekdays());
        assert_eq!(
            joined.holidays(),
            &[Date::new(25, December, 2023), Date::new(26, December, 2023)]
        );

        // joining a single calendar is behaviorally equivalent to it
        let solo = join_calendars(std::slice::from_ref(&c1)).unwrap();
        assert_eq!(solo, c1);

        assert!(join_calendars(&[]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_all_holiday_weekmask_rejected() {
        let _ = FinancialCalendar::new(vec![], "0000000".parse().unwrap());
    }
}
