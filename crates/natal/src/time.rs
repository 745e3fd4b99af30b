//! Birth timestamp normalization.
//!
//! Combines a calendar date string and an `HH:MM` clock string into a single
//! UTC instant.

use crate::error::{ChartError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use std::fmt;

lazy_static::lazy_static! {
    static ref TIME_PATTERN: Regex = Regex::new(r"^(\d{2}):(\d{2})$").expect("valid time regex");
}

/// A validated point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteInstant(DateTime<Utc>);

impl AbsoluteInstant {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for AbsoluteInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%MZ"))
    }
}

/// Parse `YYYY-M-D` or `YYYY-MM-DD` into a calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let invalid = || ChartError::InvalidDateFormat(date.to_string());

    let fields: Vec<&str> = date.split('-').collect();
    let &[year, month, day] = fields.as_slice() else {
        return Err(invalid());
    };
    let all_digits = |s: &str, max_len: usize| {
        !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !all_digits(year, 4) || year.len() < 4 || !all_digits(month, 2) || !all_digits(day, 2) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    if year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a zero-padded `HH:MM` clock time.
pub fn parse_time(time: &str) -> Result<NaiveTime> {
    let invalid = || ChartError::InvalidTimeFormat(time.to_string());

    let caps = TIME_PATTERN.captures(time).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Combine a date string and a time string into a UTC instant.
pub fn normalize(date: &str, time: &str) -> Result<AbsoluteInstant> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(AbsoluteInstant(NaiveDateTime::new(date, time).and_utc()))
}
