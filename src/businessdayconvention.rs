use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Rolling conventions.
/// These conventions specify the algorithm used to move a date to a nearby
/// business day in case it is not a valid business day itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it
    /// belongs to a different month, in which case choose the first business
    /// day before the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it
    /// belongs to a different month, in which case choose the first business
    /// day after the holiday.
    ModifiedPreceding,
    /// Do not adjust.
    Unadjusted,
}

impl BusinessDayConvention {
    /// The convention that rolls in the opposite temporal direction.
    /// Involutive: `c.inverse().inverse() == c`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Following => Self::Preceding,
            Self::Preceding => Self::Following,
            Self::ModifiedFollowing => Self::ModifiedPreceding,
            Self::ModifiedPreceding => Self::ModifiedFollowing,
            Self::Unadjusted => Self::Unadjusted,
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Following => "following",
            Self::ModifiedFollowing => "modifiedfollowing",
            Self::Preceding => "preceding",
            Self::ModifiedPreceding => "modifiedpreceding",
            Self::Unadjusted => "unadjusted",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "following" => Ok(Self::Following),
            "modifiedfollowing" => Ok(Self::ModifiedFollowing),
            "preceding" => Ok(Self::Preceding),
            "modifiedpreceding" => Ok(Self::ModifiedPreceding),
            "unadjusted" => Ok(Self::Unadjusted),
            other => Err(Error::InvalidConvention(other.to_string())),
        }
    }
}

// -------------------------------------------------------------------------------------------------
