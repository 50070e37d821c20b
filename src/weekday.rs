use crate::types::Integer;

/// Days of the week, indexed from Monday so that a weekday doubles as the
/// index into a weekmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl From<Integer> for Weekday {
    fn from(n: Integer) -> Self {
        match n {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            6 => Self::Sunday,
            other => panic!("Invalid weekday number {}", other),
        }
    }
}

impl From<Weekday> for Integer {
    fn from(wd: Weekday) -> Self {
        wd as Integer
    }
}
