//!
//! Financial date arithmetic: business day calendars, day count conventions
//! and coupon schedule generation.
//!
//! A [FinancialCalendar](calendar::FinancialCalendar) owns a holiday list
//! and a weekly pattern of working days, and answers the two families of
//! questions financial instruments need: how many days elapse between two
//! dates under a named market convention (and the matching fraction of a
//! year), and which coupon dates a bond, swap or credit default swap
//! observes between its effective and termination dates.
//!
//! # Example
//!
//! ```
//! use fincal::calendar::{FinancialCalendar, Weekmask};
//! use fincal::businessdayconvention::BusinessDayConvention::*;
//! use fincal::dategenerationrule::DateGenerationRule;
//! use fincal::date::Date;
//! use fincal::daycounter::DayCounter;
//! use fincal::months::Month::*;
//! use fincal::period::Period;
//! use fincal::schedule::ScheduleBuilder;
//! use fincal::timeunit::TimeUnit::*;
//!
//! let calendar = FinancialCalendar::new(vec![], Weekmask::weekdays());
//!
//! // quarterly CDS coupon dates under the ISDA 2015 roll rules
//! let dates = ScheduleBuilder::new(
//!     &calendar,
//!     Date::new(12, December, 2016),
//!     Date::new(20, December, 2021),
//!     Period::new(3, Months),
//! )
//! .with_convention(Following)
//! .with_termination_convention(Unadjusted)
//! .with_rule(DateGenerationRule::CDS2015)
//! .build()
//! .unwrap();
//! assert_eq!(dates[0], Date::new(20, September, 2016));
//!
//! // accrual fraction of the first coupon period
//! let act360 = DayCounter::actual_360();
//! let accrued = act360.year_fraction(dates[0], dates[1], None);
//! assert!((accrued - 91.0 / 360.0).abs() <= 1.0e-10);
//! ```

pub mod businessdayconvention;
pub mod calendar;
pub mod date;
pub mod dategenerationrule;
pub mod daycounter;
pub mod daycounters;
pub mod errors;
pub mod months;
pub mod period;
pub mod schedule;
pub mod timeunit;
pub mod types;
pub mod weekday;

use crate::types::{Integer, Natural};

/// Day of month or day count within a month, always positive.
pub type Day = Natural;

/// Calendar year.
pub type Year = Integer;
