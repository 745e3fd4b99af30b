use crate::ephemeris::service::{EphemerisError, EphemerisService};
use crate::ephemeris::types::{CelestialBody, EquatorialCoordinates, Observer};
use crate::julian::JulianDate;
use std::path::{Path, PathBuf};
use swisseph::swe::calc_ut;

// Swiss Ephemeris calculation flags
const FLG_SWIEPH: u32 = 2;
const FLG_MOSEPH: u32 = 4;
const FLG_SPEED: u32 = 256;
const FLG_EQUATORIAL: u32 = 2048;

/// Swiss Ephemeris backed [`EphemerisService`].
///
/// Nutation and aberration stay enabled (neither `FLG_NONUT` nor
/// `FLG_NOABERR` is set), so positions are apparent and referred to the
/// true equator of date.
pub struct SwissEphemeris {
    ephemeris_path: Option<PathBuf>,
}

impl SwissEphemeris {
    /// Use the Swiss data files found in `ephemeris_path`, or the built-in
    /// Moshier ephemeris when no path is given.
    ///
    /// The path reaches the C library through the process-wide `SE_EPHE_PATH`
    /// variable, which each thread reads once on its first calculation.
    /// Build the path-backed instance at startup, before other threads run
    /// calculations or read the environment. A later instance with a
    /// different path is not seen by threads that already calculated.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        if let Some(path) = &ephemeris_path {
            if !path.exists() {
                return Err(EphemerisError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                });
            }
            // Read by the C library the first time it resolves its data path.
            std::env::set_var("SE_EPHE_PATH", path);
        }
        Ok(Self { ephemeris_path })
    }

    /// Moshier analytical ephemeris, no data files needed.
    pub fn moshier() -> Self {
        Self {
            ephemeris_path: None,
        }
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    fn flags(&self) -> u32 {
        let source = if self.ephemeris_path.is_some() {
            FLG_SWIEPH
        } else {
            FLG_MOSEPH
        };
        source | FLG_SPEED | FLG_EQUATORIAL
    }
}

impl EphemerisService for SwissEphemeris {
    /// The observer is accepted for the trait contract; Swiss positions here
    /// are geocentric.
    fn equatorial(
        &self,
        body: CelestialBody,
        jd: JulianDate,
        _observer: &Observer,
    ) -> Result<EquatorialCoordinates, EphemerisError> {
        let result = calc_ut(jd.value(), body.swiss_id(), self.flags()).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_date: jd.value(),
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        // With FLG_EQUATORIAL: [ra_deg, dec_deg, dist_au, ra_speed, dec_speed, dist_speed]
        let out = result.out;
        Ok(EquatorialCoordinates {
            right_ascension_hours: out[0] / 15.0,
            declination_degrees: out[1],
            distance_au: out[2],
        })
    }
}
