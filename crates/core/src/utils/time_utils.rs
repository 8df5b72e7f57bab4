use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date of a UTC instant.
///
/// Observation dates are plain dates, so "today" for the future-date check
/// is taken in UTC regardless of the caller's timezone.
pub fn date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn today_utc() -> NaiveDate {
    date_from_utc(Utc::now())
}
