/// Units a [Period](crate::period::Period) can be expressed in.
///
/// Days and weeks are uniform in days; months and years are resolved against
/// the anchor date they are added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
}
