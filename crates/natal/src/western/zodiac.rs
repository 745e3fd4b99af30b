//! Zodiac sign, degree and house from right ascension.
//!
//! The circle is split into twelve 30° sectors starting at Aries. The house
//! number is the sector index plus one; no house system is involved.

use crate::ephemeris::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SECTOR_DEGREES: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// 0 for Aries through 11 for Pisces.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<ZodiacSign> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolver output with the exact degree value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// 1..=12
    pub house: u8,
    /// [0, 30)
    pub degrees: f64,
}

/// Map a right ascension in degrees to sign, house and degree-in-sign.
///
/// Values outside [0, 360) are wrapped first, so 360.0 lands on 0° Aries.
pub fn resolve(right_ascension: f64) -> ZodiacPosition {
    let mut ra = right_ascension.rem_euclid(360.0);
    if ra >= 360.0 {
        ra = 0.0;
    }
    // NaN casts to 0; min() keeps float noise from reaching index 12.
    let index = ((ra / SECTOR_DEGREES).floor() as usize).min(11);
    let degrees = ra - index as f64 * SECTOR_DEGREES;

    ZodiacPosition {
        sign: ZodiacSign::ALL[index],
        house: index as u8 + 1,
        degrees,
    }
}

/// Round to the nearest hundredth, half away from zero. Values that would
/// round up to 30.00 stay at 29.99.
pub fn round_degrees(degrees: f64) -> f64 {
    let hundredths = (degrees * 100.0).round().clamp(0.0, 2999.0);
    hundredths / 100.0
}

/// One body's place in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    #[serde(rename = "name")]
    pub body: CelestialBody,
    pub house: u8,
    pub sign: ZodiacSign,
    /// Degrees within the sign, two-decimal precision
    pub degrees: f64,
}

impl ZodiacPlacement {
    pub fn new(body: CelestialBody, position: &ZodiacPosition) -> Self {
        Self {
            body,
            house: position.house,
            sign: position.sign,
            degrees: round_degrees(position.degrees),
        }
    }

    pub fn from_right_ascension(body: CelestialBody, right_ascension: f64) -> Self {
        Self::new(body, &resolve(right_ascension))
    }

    /// `"29.99"` style label.
    pub fn degrees_label(&self) -> String {
        format!("{:.2}", self.degrees)
    }
}
