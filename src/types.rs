/// Integer number
pub type Integer = i32;

/// Positive integer
pub type Natural = u32;

/// Real number
pub type Real = f64;

/// Length of a container
pub type Size = usize;

/// Continuous quantity with 1-year units
pub type Time = Real;
