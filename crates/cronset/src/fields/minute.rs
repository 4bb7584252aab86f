//! Minute field: 0-59, numeric only.

use crate::builder::{Domain, SetBuilder};

/// Build the minute field builder.
pub fn minute() -> SetBuilder {
    SetBuilder::new(Domain::new(0, 59))
}
