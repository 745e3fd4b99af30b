use crate::elevation::ElevationService;
use crate::error::{ChartError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Geographic position attached to a birth request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geo {
    #[serde(rename = "lang", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "long", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "elev")]
    pub elevation: f64,
}

/// Serialized chart request. Only `date` and `time` feed the ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    #[serde(default)]
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub geo: Geo,
}

impl BirthRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        let request: BirthRequest = serde_json::from_str(text)?;
        Ok(request)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthForm {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// (latitude, longitude) of the selected city, when known
    pub coordinates: Option<(f64, f64)>,
}

impl BirthForm {
    /// Date as `YYYY-M-D`, time as zero-padded `HH:MM`.
    pub fn to_request(&self, elevation: f64) -> BirthRequest {
        BirthRequest {
            name: self.name.clone(),
            date: format!("{:04}-{}-{}", self.year, self.month, self.day),
            time: format!("{:02}:{:02}", self.hour, self.minute),
            geo: Geo {
                latitude: self.coordinates.map(|(lat, _)| lat),
                longitude: self.coordinates.map(|(_, lon)| lon),
                elevation,
            },
        }
    }
}

/// Builds [`BirthRequest`]s from form input, folding in a best-effort
/// elevation lookup.
pub struct RequestAssembler<L> {
    elevation: L,
    timeout: Duration,
}

impl<L: ElevationService> RequestAssembler<L> {
    pub fn new(elevation: L, timeout: Duration) -> Self {
        Self { elevation, timeout }
    }

    pub fn elevation_service(&self) -> &L {
        &self.elevation
    }

    /// Never fails: a missing, failed, or timed out elevation lookup yields 0 m.
    pub async fn assemble(&self, form: &BirthForm) -> BirthRequest {
        let elevation = match form.coordinates {
            Some((lat, lon)) => self.lookup_elevation(lat, lon).await,
            None => 0.0,
        };
        form.to_request(elevation)
    }

    async fn lookup_elevation(&self, lat: f64, lon: f64) -> f64 {
        match tokio::time::timeout(self.timeout, self.elevation.elevation(lat, lon)).await {
            Ok(Ok(elev)) => elev,
            Ok(Err(e)) => {
                warn!("Elevation lookup for ({lat}, {lon}) failed: {e}");
                0.0
            }
            Err(_) => {
                warn!(
                    "Elevation lookup for ({lat}, {lon}) timed out after {:?}",
                    self.timeout
                );
                0.0
            }
        }
    }
}

/// Reject requests whose required fields are blank before touching the pipeline.
pub fn validate_required_fields(request: &BirthRequest) -> Result<()> {
    if request.date.trim().is_empty() {
        return Err(ChartError::MalformedRequest("missing field `date`".to_string()));
    }
    if request.time.trim().is_empty() {
        return Err(ChartError::MalformedRequest("missing field `time`".to_string()));
    }
    Ok(())
}
