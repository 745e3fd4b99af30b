use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_ELEVATION_ENDPOINT: &str = "https://api.open-elevation.com/api/v1/lookup";

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisPathSettings {
    /// Directory holding Swiss Ephemeris `.se1` files. `None` selects the
    /// built-in Moshier ephemeris.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElevationSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayoutSettings {
    pub size: f32,
    /// `#RRGGBB` or `#RRGGBBAA` for planet labels. `None` keeps the default.
    pub planet_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NatalSettings {
    pub ephemeris: EphemerisPathSettings,
    pub elevation: ElevationSettings,
    pub chart: ChartLayoutSettings,
}

impl Default for NatalSettings {
    fn default() -> Self {
        Self {
            ephemeris: EphemerisPathSettings { path: None },
            elevation: ElevationSettings {
                endpoint: DEFAULT_ELEVATION_ENDPOINT.to_string(),
                timeout_secs: default_timeout_secs(),
            },
            chart: ChartLayoutSettings {
                size: default_chart_size(),
                planet_color: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ElevationToml {
    #[serde(default = "default_endpoint")]
    endpoint: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_chart_size")]
    size: f32,
    #[serde(default)]
    planet_color: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ELEVATION_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_chart_size() -> f32 {
    500.0
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    elevation: Option<ElevationToml>,
    #[serde(default)]
    chart: Option<ChartToml>,
}

/// Try the common relative locations of `configs/natal.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/natal.toml", "../../configs/natal.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load natal.toml from {:?}", paths);
}

/// Parse settings from TOML text. Missing sections fall back to defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<NatalSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;
    let defaults = NatalSettings::default();

    let ephemeris_path = root.ephemeris.and_then(|e| e.path);
    let elevation = match root.elevation {
        Some(ElevationToml {
            endpoint,
            timeout_secs,
        }) => {
            if endpoint.trim().is_empty() {
                anyhow::bail!("elevation.endpoint must not be empty");
            }
            if timeout_secs == 0 {
                anyhow::bail!("elevation.timeout_secs must be at least 1");
            }
            ElevationSettings {
                endpoint,
                timeout_secs,
            }
        }
        None => defaults.elevation,
    };
    let chart = match root.chart {
        Some(ChartToml { size, .. }) if size <= 0.0 => {
            anyhow::bail!("chart.size must be positive, got {size}")
        }
        Some(ChartToml { size, planet_color }) => ChartLayoutSettings { size, planet_color },
        None => defaults.chart,
    };

    Ok(NatalSettings {
        ephemeris: EphemerisPathSettings {
            path: ephemeris_path,
        },
        elevation,
        chart,
    })
}

/// Apply the `SWISS_EPHEMERIS_PATH` override and check that a configured
/// ephemeris directory exists.
pub fn resolve_ephemeris_path(settings: &mut NatalSettings) -> anyhow::Result<()> {
    if let Ok(p) = env::var("SWISS_EPHEMERIS_PATH") {
        if !p.is_empty() {
            settings.ephemeris.path = Some(PathBuf::from(p));
        }
    }
    if let Some(path) = &settings.ephemeris.path {
        if !path.exists() {
            anyhow::bail!("ephemeris.path does not exist: {}", path.display());
        }
    }
    Ok(())
}

pub fn load_settings() -> anyhow::Result<NatalSettings> {
    let text = read_config_toml_text()?;
    let mut settings = parse_settings(&text)?;
    resolve_ephemeris_path(&mut settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, NatalSettings::default());
        assert_eq!(settings.elevation.timeout_secs, 5);
        assert_eq!(settings.chart.size, 500.0);
    }

    #[test]
    fn test_sections_override_defaults() {
        let text = r##"
            [ephemeris]
            path = "/opt/sweph"

            [elevation]
            endpoint = "http://localhost:8080/lookup"
            timeout_secs = 2

            [chart]
            size = 640.0
            planet_color = "#336699"
        "##;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.ephemeris.path, Some(PathBuf::from("/opt/sweph")));
        assert_eq!(settings.elevation.endpoint, "http://localhost:8080/lookup");
        assert_eq!(settings.elevation.timeout_secs, 2);
        assert_eq!(settings.chart.size, 640.0);
        assert_eq!(settings.chart.planet_color.as_deref(), Some("#336699"));
    }

    #[test]
    fn test_shipped_config_parses() {
        let settings = parse_settings(include_str!("../../../configs/natal.toml")).unwrap();
        assert_eq!(settings.ephemeris.path, None);
        assert_eq!(settings.elevation.endpoint, DEFAULT_ELEVATION_ENDPOINT);
        assert_eq!(settings.elevation.timeout_secs, 5);
        assert_eq!(settings.chart.size, 500.0);
    }

    #[test]
    fn test_reads_config_relative_to_crate() {
        // cargo runs tests from the crate directory.
        let text = read_config_toml_text().unwrap();
        assert_eq!(text, include_str!("../../../configs/natal.toml"));
        if env::var("SWISS_EPHEMERIS_PATH").is_err() {
            let settings = load_settings().unwrap();
            assert_eq!(settings.chart.size, 500.0);
        }
    }

    #[test]
    fn test_partial_elevation_section_keeps_field_defaults() {
        let settings = parse_settings("[elevation]\ntimeout_secs = 9\n").unwrap();
        assert_eq!(settings.elevation.endpoint, DEFAULT_ELEVATION_ENDPOINT);
        assert_eq!(settings.elevation.timeout_secs, 9);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = parse_settings("[elevation]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_rejects_non_positive_chart_size() {
        assert!(parse_settings("[chart]\nsize = 0.0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_settings("[chart\nsize = 1").unwrap_err();
        assert!(err.to_string().contains("natal.toml"));
    }

    #[test]
    fn test_missing_ephemeris_dir_is_reported() {
        let mut settings = NatalSettings::default();
        settings.ephemeris.path = Some(PathBuf::from("/definitely/not/here/sweph"));
        if env::var("SWISS_EPHEMERIS_PATH").is_err() {
            assert!(resolve_ephemeris_path(&mut settings).is_err());
        }
    }
}
