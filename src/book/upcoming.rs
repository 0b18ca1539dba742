//! Upcoming birthday computation.
//!
//! A birthday's occurrence is its month and day in the reference year. The
//! occurrence is reported when it lies between the reference date and
//! `window_days` days after it, both ends inclusive. Occurrences on a
//! weekend are reported on the following Monday.
//!
//! Only the reference year is considered: on 28 December a 1 January
//! birthday is not reported.

use crate::domain::birthday::format_date;
use crate::domain::Name;
use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

/// Default length of the look-ahead window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: Name,

    /// The occurrence, moved off the weekend if needed
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

/// Move a Saturday or Sunday to the following Monday.
pub fn weekend_shift(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let shift = 7 - u64::from(date.weekday().num_days_from_monday());
            date.checked_add_days(Days::new(shift)).unwrap_or(date)
        }
        _ => date,
    }
}

/// Collect upcoming birthdays from `records`, preserving their order.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    reference: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let window = i64::from(window_days);

    records
        .into_iter()
        .filter_map(|record| {
            let occurrence = record.birthday()?.occurrence_in(reference.year())?;
            let delta = occurrence.signed_duration_since(reference).num_days();
            if !(0..=window).contains(&delta) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().clone(),
                congratulation_date: weekend_shift(occurrence),
            })
        })
        .collect()
}
