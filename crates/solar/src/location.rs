//! Observer location with its IANA time zone.

use chrono_tz::Tz;

use crate::error::SolarError;

/// A named geographic location and the time zone its events are shown in.
///
/// The time-zone identifier is resolved against the `chrono-tz` database at
/// construction, so an unknown zone is rejected before any computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

impl Location {
    /// Creates a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::EmptyName`], [`SolarError::InvalidLatitude`],
    /// [`SolarError::InvalidLongitude`] or [`SolarError::UnknownTimezone`]
    /// when the corresponding input is rejected.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Self, SolarError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SolarError::EmptyName);
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { value: longitude });
        }
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|e| SolarError::UnknownTimezone {
                name: timezone.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name,
            latitude,
            longitude,
            timezone,
        })
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the latitude in degrees, positive north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees, positive east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the resolved time zone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the canonical IANA identifier of the time zone.
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }
}
