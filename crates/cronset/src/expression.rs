//! Five-field cron expressions split into per-field value sets.
//!
//! Covers the expression-level concerns: `@hourly`-style macros, field
//! splitting, and building all five value sets in one call. Combining
//! the sets into concrete fire times is the caller's job.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SetError;
use crate::fields;

/// Shorthand macros for common schedules, as in classic cron.
const MACROS: [(&str, &str); 5] = [
    ("@yearly", "0 0 1 1 *"),
    ("@monthly", "0 0 1 * *"),
    ("@weekly", "0 0 * * 0"),
    ("@daily", "0 0 * * *"),
    ("@hourly", "0 * * * *"),
];

/// Errors produced while parsing or building a five-field expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    /// Wrong number of whitespace-separated fields.
    #[error("cron expression must have 5 fields (minutes hours day-of-month month day-of-week), got {got}")]
    FieldCount { got: usize },

    /// `@`-prefixed token that is not a known macro.
    #[error("unknown cron macro '{name}'")]
    UnknownMacro { name: String },

    /// One of the five fields failed to build.
    #[error("{field} field: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: SetError,
    },
}

/// The five schedule fields of a cron expression, kept as strings until
/// [`build`](CronFields::build) turns them into value sets.
///
/// Deserializes from configuration with every omitted field defaulting
/// to "any" (`*`, or `?` for day-of-week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronFields {
    #[serde(default = "any")]
    pub minutes: String,
    #[serde(default = "any")]
    pub hours: String,
    #[serde(default = "any")]
    pub day_of_month: String,
    #[serde(default = "any")]
    pub month: String,
    #[serde(default = "any_day_of_week")]
    pub day_of_week: String,
}

fn any() -> String {
    "*".to_string()
}

fn any_day_of_week() -> String {
    "?".to_string()
}

impl Default for CronFields {
    fn default() -> Self {
        Self {
            minutes: any(),
            hours: any(),
            day_of_month: any(),
            month: any(),
            day_of_week: any_day_of_week(),
        }
    }
}

impl CronFields {
    /// Parse a 5-field cron expression, expanding `@` macros first.
    pub fn parse(expression: &str) -> Result<Self, ExpressionError> {
        let trimmed = expression.trim();
        let expanded = if trimmed.starts_with('@') {
            match MACROS.iter().find(|(name, _)| *name == trimmed) {
                Some((name, expansion)) => {
                    debug!(name = *name, expansion = *expansion, "expanded cron macro");
                    *expansion
                }
                None => {
                    return Err(ExpressionError::UnknownMacro {
                        name: trimmed.to_string(),
                    })
                }
            }
        } else {
            trimmed
        };

        let parts: Vec<&str> = expanded.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(ExpressionError::FieldCount { got: parts.len() });
        }

        Ok(Self {
            minutes: parts[0].to_string(),
            hours: parts[1].to_string(),
            day_of_month: parts[2].to_string(),
            month: parts[3].to_string(),
            day_of_week: parts[4].to_string(),
        })
    }

    /// Build the five value sets for a specific year and month.
    ///
    /// The year and month feed the day-of-month builder, which needs
    /// the month length and weekday layout for `L` and `<d>W`.
    pub fn build(&self, year: i32, month: u32) -> Result<CronFieldSets, ExpressionError> {
        let minutes = field("minutes", fields::minute().build(&self.minutes))?;
        let hours = field("hours", fields::hour().build(&self.hours))?;
        let days_of_month = field(
            "day-of-month",
            fields::monthday(year, month).and_then(|b| b.build(&self.day_of_month)),
        )?;
        let months = field("month", fields::month().build(&self.month))?;
        let days_of_week = field("day-of-week", fields::weekday().build(&self.day_of_week))?;

        debug!(
            minutes = minutes.len(),
            hours = hours.len(),
            days_of_month = days_of_month.len(),
            months = months.len(),
            days_of_week = days_of_week.len(),
            "built cron field sets"
        );

        Ok(CronFieldSets {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
        })
    }

    /// Check that every field builds, against the current month.
    pub fn validate(&self) -> Result<(), ExpressionError> {
        let today = Utc::now().date_naive();
        self.build(today.year(), today.month()).map(|_| ())
    }
}

fn field<T>(name: &'static str, result: Result<T, SetError>) -> Result<T, ExpressionError> {
    result.map_err(|source| ExpressionError::Field {
        field: name,
        source,
    })
}

impl fmt::Display for CronFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minutes, self.hours, self.day_of_month, self.month, self.day_of_week
        )
    }
}

impl FromStr for CronFields {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Concrete value sets for the five schedule fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronFieldSets {
    pub minutes: BTreeSet<u32>,
    pub hours: BTreeSet<u32>,
    pub days_of_month: BTreeSet<u32>,
    pub months: BTreeSet<u32>,
    pub days_of_week: BTreeSet<u32>,
}
