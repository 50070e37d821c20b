use std::ops::{Mul, Neg};

use crate::timeunit::TimeUnit;
use crate::types::Integer;

/// A length of time expressed as an integer number of time units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    pub length: Integer,
    pub unit: TimeUnit,
}

impl Period {
    pub fn new(length: Integer, unit: TimeUnit) -> Self {
        Self { length, unit }
    }
}

impl Mul<Integer> for Period {
    type Output = Period;

    fn mul(self, rhs: Integer) -> Self::Output {
        Period::new(self.length * rhs, self.unit)
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Self::Output {
        Period::new(-self.length, self.unit)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::Period;
    use crate::timeunit::TimeUnit::*;

    #[test]
    fn test_period_arithmetic() {
        let p = Period::new(3, Months);
        assert_eq!(p * 2, Period::new(6, Months));
        assert_eq!(-p, Period::new(-3, Months));
        assert_eq!(p * -1, -p);
    }
}
