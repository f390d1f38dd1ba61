use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::model::AddressBook;
use crate::validation::{date_format, format_date};

/// How far ahead, in days, the upcoming-birthday query looks.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(with = "date_format")]
    pub congratulation_date: NaiveDate,
    /// Days between the reference date and `congratulation_date`.
    #[serde(skip)]
    pub days_until: i64,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        format_date(self.congratulation_date)
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// Contacts whose congratulation date falls within [`UPCOMING_WINDOW_DAYS`]
/// of `reference_date`, inclusive on both ends.
///
/// The birthday is placed in the reference year and moved off the weekend.
/// When that lands before `reference_date` the birthday is placed in the
/// following year instead. Records without a birthday are skipped. Rows
/// come back in the book's insertion order.
pub fn upcoming_birthdays(book: &AddressBook, reference_date: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut results = Vec::new();

    for record in book.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some((congratulation_date, days_until)) =
            next_congratulation(birthday, reference_date)
        else {
            continue;
        };

        if (0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
            debug!(
                contact = record.name(),
                date = %format_date(congratulation_date),
                days_until,
                "birthday upcoming"
            );
            results.push(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date,
                days_until,
            });
        }
    }

    debug!(
        reference_date = %reference_date,
        total = book.len(),
        upcoming = results.len(),
        "upcoming birthdays computed"
    );
    results
}

/// Congratulation date for `birthday` relative to `reference_date`, with its
/// signed distance in days. `None` only when the date falls outside chrono's
/// supported range.
pub fn next_congratulation(birthday: NaiveDate, reference_date: NaiveDate) -> Option<(NaiveDate, i64)> {
    let year = reference_date.year();

    let this_year = congratulation_date(birthday, year)?;
    let days = days_between(reference_date, this_year);
    if days >= 0 {
        return Some((this_year, days));
    }

    let next_year = congratulation_date(birthday, year + 1)?;
    Some((next_year, days_between(reference_date, next_year)))
}

/// The birthday placed in `year` and moved off the weekend.
pub fn congratulation_date(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    anchor_to_year(birthday, year).map(shift_off_weekend)
}

/// Same month and day in `year`. Feb 29 becomes Feb 28 outside leap years.
fn anchor_to_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Saturdays and Sundays move forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
