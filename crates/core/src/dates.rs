//! Date helpers used across the admin panel
//!
//! Appointment slots travel as `day_month_year` strings (for example
//! `20_01_2000`) and patient birth dates as ISO dates. Both helpers have a
//! fallible form returning [`DateError`] and a display form that collapses
//! every failure into [`INVALID_DATE`].

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Text shown in place of a date that could not be interpreted
pub const INVALID_DATE: &str = "Invalid date";

/// Month abbreviations indexed by `month - 1`
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Reasons a date string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date is missing")]
    Missing,

    #[error("expected day_month_year, found {0} segment(s)")]
    SegmentCount(usize),

    #[error("month is not a number: {0:?}")]
    InvalidMonth(String),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(usize),

    #[error("not a recognised date: {0:?}")]
    Unparseable(String),
}

/// Look up the abbreviation for a 1-based month number
pub fn month_abbreviation(month: &str) -> Result<&'static str, DateError> {
    let number: usize = month
        .trim()
        .parse()
        .map_err(|_| DateError::InvalidMonth(month.to_string()))?;

    number
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index))
        .copied()
        .ok_or(DateError::MonthOutOfRange(number))
}

/// Format a `day_month_year` slot date as `day Mon year`
///
/// Day and year are passed through untouched; only the month is checked.
pub fn try_format_slot_date(slot_date: Option<&str>) -> Result<String, DateError> {
    let raw = slot_date
        .filter(|value| !value.is_empty())
        .ok_or(DateError::Missing)?;

    let segments: Vec<&str> = raw.split('_').collect();
    let [day, month, year] = segments.as_slice() else {
        return Err(DateError::SegmentCount(segments.len()));
    };

    let month = month_abbreviation(month)?;
    Ok(format!("{day} {month} {year}"))
}

/// Display form of [`try_format_slot_date`]
#[must_use]
pub fn format_slot_date(slot_date: Option<&str>) -> String {
    try_format_slot_date(slot_date).unwrap_or_else(|err| {
        tracing::debug!(?slot_date, %err, "Slot date could not be formatted");
        INVALID_DATE.to_string()
    })
}

/// Calendar layouts accepted for birth dates, ISO first, then the slash
/// forms browsers parse (`MM/DD/YYYY`, `YYYY/MM/DD`)
const BIRTH_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a birth date given as a date, a naive timestamp or an RFC 3339 timestamp
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();

    if let Some(date) = BIRTH_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    {
        return Ok(date);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }

    Err(DateError::Unparseable(raw.to_string()))
}

/// Whole years between `date_of_birth` and `today`
///
/// The birthday counts as passed on the exact month and day, so someone born
/// on 2000-01-20 is 24 on 2024-01-20 and 23 the day before. A birth date in
/// the future yields a negative age.
pub fn compute_age(date_of_birth: Option<&str>, today: NaiveDate) -> Result<i32, DateError> {
    let raw = date_of_birth
        .filter(|value| !value.trim().is_empty())
        .ok_or(DateError::Missing)?;
    let birth = parse_birth_date(raw)?;

    let mut age = today.year() - birth.year();
    let birthday_passed = (today.month(), today.day()) >= (birth.month(), birth.day());
    if !birthday_passed {
        age -= 1;
    }

    Ok(age)
}

/// Display form of [`compute_age`]
#[must_use]
pub fn age_label(date_of_birth: Option<&str>, today: NaiveDate) -> String {
    match compute_age(date_of_birth, today) {
        Ok(age) => age.to_string(),
        Err(err) => {
            tracing::debug!(?date_of_birth, %err, "Age could not be computed");
            INVALID_DATE.to_string()
        }
    }
}

/// [`age_label`] against the local calendar date
#[must_use]
pub fn age_today(date_of_birth: Option<&str>) -> String {
    age_label(date_of_birth, Local::now().date_naive())
}
