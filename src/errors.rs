use thiserror::Error;

use crate::dategenerationrule::DateGenerationRule;
use crate::types::Size;

/// Errors reported by calendar and day count operations.
///
/// All failures are reported eagerly; no operation retries or returns a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Vector inputs of incompatible lengths were passed to a day counter.
    #[error("start dates and end dates must have equal shape ({left} vs {right})")]
    ShapeMismatch { left: Size, right: Size },

    /// `until`/`after` called with an empty date vector.
    #[error("dates must have at least one date")]
    EmptyDates,

    /// A schedule was requested with a reserved date generation rule.
    #[error("date generation rule {0} is not implemented")]
    RuleNotImplemented(DateGenerationRule),

    /// A weekmask literal did not have exactly seven entries.
    #[error("weekmask must have exactly 7 entries, got {0}")]
    WeekmaskLength(Size),

    /// A weekmask literal contained a character other than '0' or '1'.
    #[error("invalid weekmask character {0:?}, expected '0' or '1'")]
    WeekmaskChar(char),

    /// `join_calendars` called with an empty sequence.
    #[error("cannot join an empty sequence of calendars")]
    NoCalendars,

    /// A date literal failed to parse as an ISO-8601 civil date.
    #[error("invalid civil date literal {0:?}")]
    InvalidDate(String),

    /// A convention literal did not name one of the five rolling conventions.
    #[error("invalid rolling convention {0:?}")]
    InvalidConvention(String),

    /// A rule literal did not name one of the date generation rules.
    #[error("invalid date generation rule {0:?}")]
    InvalidRule(String),
}
