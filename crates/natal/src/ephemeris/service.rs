use crate::ephemeris::types::{CelestialBody, EquatorialCoordinates, Observer};
use crate::julian::JulianDate;
use thiserror::Error;

/// Errors raised by an ephemeris backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_date}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        julian_date: f64,
        message: String,
    },
}

/// Source of apparent equatorial coordinates.
///
/// Implementations return right ascension in hours. Aberration and nutation
/// corrections are expected to be applied.
pub trait EphemerisService {
    fn equatorial(
        &self,
        body: CelestialBody,
        jd: JulianDate,
        observer: &Observer,
    ) -> Result<EquatorialCoordinates, EphemerisError>;
}

impl<S: EphemerisService + ?Sized> EphemerisService for &S {
    fn equatorial(
        &self,
        body: CelestialBody,
        jd: JulianDate,
        observer: &Observer,
    ) -> Result<EquatorialCoordinates, EphemerisError> {
        (**self).equatorial(body, jd, observer)
    }
}

impl<S: EphemerisService + ?Sized> EphemerisService for Box<S> {
    fn equatorial(
        &self,
        body: CelestialBody,
        jd: JulianDate,
        observer: &Observer,
    ) -> Result<EquatorialCoordinates, EphemerisError> {
        (**self).equatorial(body, jd, observer)
    }
}
