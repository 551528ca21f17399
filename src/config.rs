use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level sunsets configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SunsetsConfig {
    /// Year to generate; the current year when unset.
    #[serde(default)]
    pub year: Option<i32>,

    /// Observer location.
    #[serde(default)]
    pub location: LocationToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Sun-time settings.
    #[serde(default)]
    pub solar: SolarToml,
}

impl SunsetsConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            name: default_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

fn default_name() -> String {
    "New York, NY".to_string()
}
fn default_latitude() -> f64 {
    40.7128
}
fn default_longitude() -> f64 {
    -74.0060
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("sunsets.ics")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarToml {
    #[serde(default = "default_horizon")]
    pub horizon: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for SolarToml {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            algorithm: default_algorithm(),
        }
    }
}

fn default_horizon() -> String {
    "sunrise-sunset".to_string()
}
fn default_algorithm() -> String {
    "noaa".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: SunsetsConfig = toml::from_str("").unwrap();
        assert_eq!(config.year, None);
        assert_eq!(config.location.name, "New York, NY");
        assert_eq!(config.location.latitude, 40.7128);
        assert_eq!(config.location.longitude, -74.006);
        assert_eq!(config.location.timezone, "America/New_York");
        assert_eq!(config.output.path, PathBuf::from("sunsets.ics"));
        assert_eq!(config.solar.horizon, "sunrise-sunset");
        assert_eq!(config.solar.algorithm, "noaa");
    }

    #[test]
    fn full_file() {
        let toml_str = r#"
            year = 2027

            [location]
            name = "San Francisco, CA"
            latitude = 37.7749
            longitude = -122.4194
            timezone = "America/Los_Angeles"

            [output]
            path = "sf.ics"

            [solar]
            horizon = "civil"
            algorithm = "spa"
        "#;
        let config: SunsetsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.year, Some(2027));
        assert_eq!(config.location.name, "San Francisco, CA");
        assert_eq!(config.location.longitude, -122.4194);
        assert_eq!(config.output.path, PathBuf::from("sf.ics"));
        assert_eq!(config.solar.horizon, "civil");
        assert_eq!(config.solar.algorithm, "spa");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: SunsetsConfig = toml::from_str("[location]\nname = \"Home\"\n").unwrap();
        assert_eq!(config.location.name, "Home");
        assert_eq!(config.location.timezone, "America/New_York");
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<SunsetsConfig, _> = toml::from_str("[location]\nelevation = 10.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = SunsetsConfig::load(Path::new("/nonexistent/sunsets.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sunsets.toml");
        std::fs::write(&path, "year = 2030\n").expect("write config");
        let config = SunsetsConfig::load(&path).unwrap();
        assert_eq!(config.year, Some(2030));
    }
}
