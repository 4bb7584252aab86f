//! Inclusive integer domain for a schedule field.

use crate::error::SetError;

/// Inclusive integer range a field value must fall in, plus whether
/// descending ranges wrap around the domain edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    min: u32,
    max: u32,
    wrap: bool,
}

impl Domain {
    /// Create a non-wrapping domain over `min..=max`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "domain min {} exceeds max {}", min, max);
        Self {
            min,
            max,
            wrap: false,
        }
    }

    /// Create a wrapping domain: a descending range runs past `max` and
    /// re-enters at `min` (e.g. `fri-mon` on the weekday field).
    pub fn wrapping(min: u32, max: u32) -> Self {
        Self {
            wrap: true,
            ..Self::new(min, max)
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether descending ranges wrap around the edges.
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Check a parsed value against the bounds.
    pub(crate) fn checked(&self, value: i64) -> Result<u32, SetError> {
        if value < i64::from(self.min) || value > i64::from(self.max) {
            return Err(SetError::Domain {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value as u32)
    }

    /// Materialize the inclusive run from `start` to `end`, in run
    /// order, wrapping around the domain edges when permitted.
    pub(crate) fn run(&self, start: u32, end: u32) -> Result<Vec<u32>, SetError> {
        if start <= end {
            Ok((start..=end).collect())
        } else if self.wrap {
            Ok((start..=self.max).chain(self.min..=end).collect())
        } else {
            Err(SetError::ReversedRange {
                start,
                end,
                min: self.min,
                max: self.max,
            })
        }
    }
}
