//! Generic schedule-field expression engine.
//!
//! One engine serves every field type. A [`SetBuilder`] is configured
//! with a [`Domain`] value, an optional case-insensitive alias table,
//! and an optional token resolver closure; field-specific behavior is
//! data, not subclassing. The stock configurations live in
//! [`crate::fields`].

mod core;
mod domain;


pub use self::core::{SetBuilder, TokenResolver};
pub use self::domain::Domain;
