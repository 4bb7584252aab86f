//! Cron-style schedule field expression engine.
//!
//! This crate provides:
//! - A generic [`SetBuilder`] engine turning field expressions
//!   (`"12am"`, `"Dec"`, `"9-17/2"`, `"*/15"`) into integer value sets
//! - Stock field configurations: minute, hour (am/pm tokens), month
//!   (month names), day-of-month (`L`, `<d>W`), day-of-week (wrapping)
//! - Five-field expression splitting with `@hourly`-style macros
//!
//! Builders are immutable after construction and safe to share across
//! threads. Building a set is pure: no I/O, no retained state, and the
//! result is allocated fresh on every call.

pub mod builder;
pub mod error;
pub mod expression;
pub mod fields;

pub use builder::{Domain, SetBuilder, TokenResolver};
pub use error::SetError;
pub use expression::{CronFieldSets, CronFields, ExpressionError};
