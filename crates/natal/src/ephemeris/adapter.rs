use crate::ephemeris::service::EphemerisService;
use crate::ephemeris::types::{CelestialBody, EphemerisSample, EquatorialCoordinates, Observer};
use crate::error::{ChartError, Result};
use crate::julian::JulianDate;
use log::debug;

/// Degrees of right ascension per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Queries an [`EphemerisService`] from the fixed reference observer and
/// turns its output into degree-based samples.
pub struct EphemerisAdapter<S> {
    service: S,
    observer: Observer,
}

impl<S: EphemerisService> EphemerisAdapter<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            observer: Observer::REFERENCE,
        }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Sample a single body.
    pub fn sample(&self, body: CelestialBody, jd: JulianDate) -> Result<EphemerisSample> {
        let coords = self
            .service
            .equatorial(body, jd, &self.observer)
            .map_err(|e| unavailable(body, jd, e.to_string()))?;

        let sample = to_sample(body, jd, coords)?;
        debug!(
            "{} at JD {}: ra={:.4} dec={:.4} dist={:.6}",
            body, jd, sample.right_ascension, sample.declination, sample.distance
        );
        Ok(sample)
    }

    /// Sample every body of [`CelestialBody::ALL`] in declared order.
    /// Fails on the first body the service cannot produce.
    pub fn sample_all(&self, jd: JulianDate) -> Result<Vec<EphemerisSample>> {
        CelestialBody::ALL
            .iter()
            .map(|&body| self.sample(body, jd))
            .collect()
    }
}

fn unavailable(body: CelestialBody, jd: JulianDate, message: String) -> ChartError {
    ChartError::EphemerisUnavailable {
        body,
        julian_date: jd.value(),
        message,
    }
}

fn to_sample(
    body: CelestialBody,
    jd: JulianDate,
    coords: EquatorialCoordinates,
) -> Result<EphemerisSample> {
    let EquatorialCoordinates {
        right_ascension_hours,
        declination_degrees,
        distance_au,
    } = coords;

    if !right_ascension_hours.is_finite() || !declination_degrees.is_finite() || !distance_au.is_finite() {
        return Err(unavailable(body, jd, "non-finite coordinates".to_string()));
    }
    if !(-90.0..=90.0).contains(&declination_degrees) {
        return Err(unavailable(
            body,
            jd,
            format!("declination {declination_degrees} outside [-90, 90]"),
        ));
    }
    if distance_au <= 0.0 {
        return Err(unavailable(
            body,
            jd,
            format!("non-positive distance {distance_au}"),
        ));
    }

    let mut right_ascension = (right_ascension_hours * DEGREES_PER_HOUR).rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if right_ascension >= 360.0 {
        right_ascension = 0.0;
    }

    Ok(EphemerisSample {
        body,
        right_ascension,
        declination: declination_degrees,
        distance: distance_au,
    })
}
