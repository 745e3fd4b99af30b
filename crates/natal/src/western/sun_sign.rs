//! Traditional sun sign from the calendar date alone.

use crate::error::{ChartError, Result};
use crate::western::zodiac::ZodiacSign;
use chrono::{Datelike, NaiveDate};

/// Sun sign for a month (1-12) and day (1-31), using inclusive boundary days.
pub fn sun_sign(month: u32, day: u32) -> Result<ZodiacSign> {
    let sign = match (month, day) {
        (3, 21..=31) | (4, 1..=19) => ZodiacSign::Aries,
        (4, 20..=31) | (5, 1..=20) => ZodiacSign::Taurus,
        (5, 21..=31) | (6, 1..=20) => ZodiacSign::Gemini,
        (6, 21..=31) | (7, 1..=22) => ZodiacSign::Cancer,
        (7, 23..=31) | (8, 1..=22) => ZodiacSign::Leo,
        (8, 23..=31) | (9, 1..=22) => ZodiacSign::Virgo,
        (9, 23..=31) | (10, 1..=22) => ZodiacSign::Libra,
        (10, 23..=31) | (11, 1..=21) => ZodiacSign::Scorpio,
        (11, 22..=31) | (12, 1..=21) => ZodiacSign::Sagittarius,
        (12, 22..=31) | (1, 1..=19) => ZodiacSign::Capricorn,
        (1, 20..=31) | (2, 1..=18) => ZodiacSign::Aquarius,
        (2, 19..=31) | (3, 1..=20) => ZodiacSign::Pisces,
        _ => return Err(ChartError::InvalidBirthDate { month, day }),
    };
    Ok(sign)
}

/// Sun sign for a real calendar date. Every valid date has one.
pub fn sun_sign_for_date(date: &NaiveDate) -> ZodiacSign {
    match sun_sign(date.month(), date.day()) {
        Ok(sign) => sign,
        Err(e) => unreachable!("sun sign ranges must cover every calendar day: {e}"),
    }
}
