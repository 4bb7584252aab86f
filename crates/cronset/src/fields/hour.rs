//! Hour field: 0-23, with am/pm alias tokens.

use crate::builder::{Domain, SetBuilder};

/// Build the hour field builder.
///
/// Besides plain `0..=23`, the tokens `1am..12am` and `1pm..12pm` are
/// accepted case-insensitively: `12am` is midnight (0) and `12pm` is
/// noon (12). Anything else with an am/pm suffix (`0am`, `13pm`, bare
/// `pm`) is rejected.
pub fn hour() -> SetBuilder {
    let mut aliases = Vec::with_capacity(24);
    for n in 1..=12u32 {
        aliases.push((format!("{n}am"), n % 12));
        aliases.push((format!("{n}pm"), n % 12 + 12));
    }
    SetBuilder::new(Domain::new(0, 23)).with_aliases(aliases)
}
