pub mod actual;
pub mod actualactual;
pub mod business252;
pub mod one;
pub mod thirty360;
pub mod thirty365;
