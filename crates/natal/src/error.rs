use crate::ephemeris::CelestialBody;
use thiserror::Error;

/// Errors that abort a chart-generation request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date format: {0:?}. Expected YYYY-M-D or YYYY-MM-DD with a real calendar day")]
    InvalidDateFormat(String),
    #[error("Invalid time format: {0:?}. Expected HH:MM with HH in 00-23 and MM in 00-59")]
    InvalidTimeFormat(String),
    #[error("No sun sign covers month {month}, day {day}")]
    InvalidBirthDate { month: u32, day: u32 },
    #[error("Ephemeris unavailable for {body} at JD {julian_date}: {message}")]
    EphemerisUnavailable {
        body: CelestialBody,
        julian_date: f64,
        message: String,
    },
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::MalformedRequest(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
