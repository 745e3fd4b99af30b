//! Julian Date conversion.

use crate::time::AbsoluteInstant;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2440587.5;

pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days (with fraction) since the Julian epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDate(f64);

impl JulianDate {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Uses the full instant, date and time of day together.
    pub fn from_instant(instant: &AbsoluteInstant) -> Self {
        Self(JD_UNIX_EPOCH + instant.timestamp_millis() as f64 / MILLIS_PER_DAY)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Inverse of [`JulianDate::from_instant`], rounded to the millisecond.
    /// Returns `None` outside chrono's representable range.
    pub fn to_instant(&self) -> Option<AbsoluteInstant> {
        let millis = ((self.0 - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round();
        if !millis.is_finite() {
            return None;
        }
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .map(AbsoluteInstant::from_datetime)
    }
}

impl From<&AbsoluteInstant> for JulianDate {
    fn from(instant: &AbsoluteInstant) -> Self {
        Self::from_instant(instant)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
