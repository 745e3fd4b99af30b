use crate::ephemeris::{EphemerisAdapter, EphemerisService, SwissEphemeris};
use crate::error::Result;
use crate::julian::JulianDate;
use crate::request::{validate_required_fields, BirthRequest};
use crate::time::normalize;
use crate::western::{sun_sign_for_date, ZodiacPlacement, ZodiacSign};
use log::info;
use natal_config::NatalSettings;
use serde::{Deserialize, Serialize};

/// Chart data handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub name: String,
    pub julian_date: JulianDate,
    pub placements: Vec<ZodiacPlacement>,
    pub sun_sign: ZodiacSign,
}

impl NatalChart {
    pub fn placements_in_house(&self, house: u8) -> impl Iterator<Item = &ZodiacPlacement> {
        self.placements.iter().filter(move |p| p.house == house)
    }
}

/// Date + time to zodiac placements.
pub struct ChartEngine<S> {
    adapter: EphemerisAdapter<S>,
}

impl ChartEngine<SwissEphemeris> {
    pub fn from_settings(settings: &NatalSettings) -> anyhow::Result<Self> {
        let swiss = SwissEphemeris::new(settings.ephemeris.path.clone())?;
        Ok(Self::new(swiss))
    }
}

impl<S: EphemerisService> ChartEngine<S> {
    pub fn new(service: S) -> Self {
        Self {
            adapter: EphemerisAdapter::new(service),
        }
    }

    pub fn adapter(&self) -> &EphemerisAdapter<S> {
        &self.adapter
    }

    /// One placement per body, in [`crate::ephemeris::CelestialBody::ALL`] order.
    pub fn generate(&self, date: &str, time: &str) -> Result<Vec<ZodiacPlacement>> {
        let instant = normalize(date, time)?;
        self.placements_at(JulianDate::from_instant(&instant))
    }

    pub fn placements_at(&self, jd: JulianDate) -> Result<Vec<ZodiacPlacement>> {
        let samples = self.adapter.sample_all(jd)?;
        Ok(samples
            .iter()
            .map(|s| ZodiacPlacement::from_right_ascension(s.body, s.right_ascension))
            .collect())
    }

    /// Full chart for a request. Either every body resolves or nothing is returned.
    pub fn natal_chart(&self, request: &BirthRequest) -> Result<NatalChart> {
        validate_required_fields(request)?;
        let instant = normalize(&request.date, &request.time)?;
        let julian_date = JulianDate::from_instant(&instant);
        let placements = self.placements_at(julian_date)?;
        let sun_sign = sun_sign_for_date(&instant.date());

        info!(
            "Generated chart for {:?} at {} (JD {}), sun sign {}",
            request.name, instant, julian_date, sun_sign
        );

        Ok(NatalChart {
            name: request.name.clone(),
            julian_date,
            placements,
            sun_sign,
        })
    }

    pub fn natal_chart_from_json(&self, text: &str) -> Result<NatalChart> {
        self.natal_chart(&BirthRequest::from_json(text)?)
    }
}
