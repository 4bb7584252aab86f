//! Month field: 1-12, with month name aliases.

use crate::builder::{Domain, SetBuilder};

pub(crate) const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Build the month field builder. Both the three-letter abbreviations
/// and the full English names resolve case-insensitively to `1..=12`.
pub fn month() -> SetBuilder {
    let mut aliases = Vec::with_capacity(24);
    for (i, (abbrev, name)) in MONTH_ABBREVS.iter().zip(MONTH_NAMES.iter()).enumerate() {
        let value = i as u32 + 1;
        aliases.push((*abbrev, value));
        aliases.push((*name, value));
    }
    SetBuilder::new(Domain::new(1, 12)).with_aliases(aliases)
}
