//! Stock field configurations of the [`SetBuilder`](crate::SetBuilder)
//! engine.
//!
//! Each function returns a builder wired with the field's domain, alias
//! table, and any field-specific token resolver. Builders are immutable
//! and reusable across calls.

mod hour;
mod minute;
mod month;
mod monthday;
mod weekday;


pub use self::hour::hour;
pub use self::minute::minute;
pub use self::month::month;
pub use self::monthday::monthday;
pub use self::weekday::weekday;
