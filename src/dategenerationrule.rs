use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Date generation rules for coupon schedules.
///
/// `ThirdWednesday`, `Twentieth` and `TwentiethIMM` are reserved names kept
/// for interface stability; asking for a schedule with one of them fails
/// with [Error::RuleNotImplemented].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateGenerationRule {
    /// Backward from termination date, stub period at the start.
    #[cfg_attr(feature = "serde", serde(rename = "backward"))]
    Backward,
    /// Forward from effective date, stub period at the end.
    #[cfg_attr(feature = "serde", serde(rename = "forward"))]
    Forward,
    /// No intermediate dates between effective and termination date.
    #[cfg_attr(feature = "serde", serde(rename = "zero"))]
    Zero,
    /// Quarterly IMM twentieths, pre-2015 CDS market convention.
    #[cfg_attr(feature = "serde", serde(rename = "CDS"))]
    CDS,
    /// Quarterly IMM twentieths per the ISDA 2015 CDS roll rules.
    #[cfg_attr(feature = "serde", serde(rename = "CDS_2015"))]
    CDS2015,
    /// Old-style CDS schedule with a minimum 30 day first stub.
    #[cfg_attr(feature = "serde", serde(rename = "old_CDS"))]
    OldCDS,
    #[cfg_attr(feature = "serde", serde(rename = "ThirdWednesDay"))]
    ThirdWednesday,
    #[cfg_attr(feature = "serde", serde(rename = "Twentieth"))]
    Twentieth,
    #[cfg_attr(feature = "serde", serde(rename = "Twentieth_IMM"))]
    TwentiethIMM,
}

impl fmt::Display for DateGenerationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
            Self::Zero => "zero",
            Self::CDS => "CDS",
            Self::CDS2015 => "CDS_2015",
            Self::OldCDS => "old_CDS",
            // historical capitalization, kept for interface stability
            Self::ThirdWednesday => "ThirdWednesDay",
            Self::Twentieth => "Twentieth",
            Self::TwentiethIMM => "Twentieth_IMM",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DateGenerationRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backward" => Ok(Self::Backward),
            "forward" => Ok(Self::Forward),
            "zero" => Ok(Self::Zero),
            "CDS" => Ok(Self::CDS),
            "CDS_2015" => Ok(Self::CDS2015),
            "old_CDS" => Ok(Self::OldCDS),
            "ThirdWednesDay" => Ok(Self::ThirdWednesday),
            "Twentieth" => Ok(Self::Twentieth),
            "Twentieth_IMM" => Ok(Self::TwentiethIMM),
            other => Err(Error::InvalidRule(other.to_string())),
        }
    }
}

// -------------------------------------------------------------------------------------------------
