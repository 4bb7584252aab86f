//! Day-of-month field: 1 to the month's last day, with `L` and `<d>W`.

use chrono::{Datelike, NaiveDate};

use crate::builder::{Domain, SetBuilder};
use crate::error::SetError;

/// Build the day-of-month field builder for a specific month.
///
/// The domain upper bound is the month's last day. `L` selects the last
/// day and `<d>W` the working day nearest to `d` within the month.
/// Days past the month's end (up to 31) resolve to the empty set, so an
/// expression like `31` stays valid across short months. Fails when
/// `month` is outside `1..=12`.
pub fn monthday(year: i32, month: u32) -> Result<SetBuilder, SetError> {
    let (first_weekday, last_day) = month_range(year, month).ok_or(SetError::Domain {
        value: i64::from(month),
        min: 1,
        max: 12,
    })?;

    let builder = SetBuilder::new(Domain::new(1, last_day))
        .with_aliases([("l", last_day)])
        .with_resolver(move |token| resolve_day(token, first_weekday, last_day));
    Ok(builder)
}

/// Weekday of the 1st (0 = Monday) and last day number of the month.
fn month_range(year: i32, month: u32) -> Option<(u32, u32)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_day = next.pred_opt()?.day();
    Some((first.weekday().num_days_from_monday(), last_day))
}

fn resolve_day(token: &str, first_weekday: u32, last_day: u32) -> Option<Vec<u32>> {
    // dW: working day nearest to day d.
    if let Some(day_str) = token.strip_suffix('W') {
        let day: u32 = day_str.parse().ok()?;
        if day < 1 || day > last_day {
            return None;
        }
        return Some(vec![nearest_weekday(day, first_weekday, last_day)]);
    }

    // Days past the end of a short month select nothing instead of failing.
    if let Ok(day) = token.parse::<u32>() {
        if day > last_day && day <= 31 {
            return Some(Vec::new());
        }
    }

    None
}

/// Working day nearest to `day`, staying inside the month.
fn nearest_weekday(day: u32, first_weekday: u32, last_day: u32) -> u32 {
    let weekday = (day % 7 + first_weekday + 6) % 7;
    if weekday == 5 {
        // Saturday: previous Friday, or the following Monday at the month start.
        if day > 1 {
            day - 1
        } else {
            day + 2
        }
    } else if weekday == 6 {
        // Sunday: next Monday, or the preceding Saturday at the month end.
        if day < last_day {
            day + 1
        } else {
            day - 2
        }
    } else {
        day
    }
}
