//! Day-of-week field: 0 (Monday) through 6 (Sunday), wrapping.

use crate::builder::{Domain, SetBuilder};

pub(crate) const DAY_ABBREVS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

pub(crate) const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Build the day-of-week field builder.
///
/// The domain wraps at Sunday, so `fri-mon` denotes Friday through
/// Monday. Name aliases resolve case-insensitively to `0..=6`.
pub fn weekday() -> SetBuilder {
    let mut aliases = Vec::with_capacity(14);
    for (i, (abbrev, name)) in DAY_ABBREVS.iter().zip(DAY_NAMES.iter()).enumerate() {
        aliases.push((*abbrev, i as u32));
        aliases.push((*name, i as u32));
    }
    SetBuilder::new(Domain::wrapping(0, 6)).with_aliases(aliases)
}
