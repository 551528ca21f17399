//! Sunrise/sunset pair for a single day.

use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;

use crate::error::SolarError;
use crate::horizon::SunHorizon;

/// Sunrise and sunset instants for one location and day, zoned to the
/// location's time zone.
///
/// The sunset may fall after local midnight at high latitudes; [`date`]
/// still reports the day that was resolved.
///
/// [`date`]: SunTimes::date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimes {
    date: NaiveDate,
    sunrise: DateTime<Tz>,
    sunset: DateTime<Tz>,
    horizon: SunHorizon,
}

impl SunTimes {
    /// Pairs a sunrise with the sunset that follows it, for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvertedTimes`] unless `sunrise < sunset`.
    pub fn new(
        date: NaiveDate,
        sunrise: DateTime<Tz>,
        sunset: DateTime<Tz>,
    ) -> Result<Self, SolarError> {
        if sunrise >= sunset {
            return Err(SolarError::InvertedTimes {
                sunrise: sunrise.to_rfc3339(),
                sunset: sunset.to_rfc3339(),
            });
        }
        Ok(Self {
            date,
            sunrise,
            sunset,
            horizon: SunHorizon::default(),
        })
    }

    /// Records the horizon the instants were computed for.
    pub fn with_horizon(mut self, horizon: SunHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Returns the calendar date these times were resolved for.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the sunrise instant.
    pub fn sunrise(&self) -> &DateTime<Tz> {
        &self.sunrise
    }

    /// Returns the sunset instant.
    pub fn sunset(&self) -> &DateTime<Tz> {
        &self.sunset
    }

    /// Returns the horizon the instants refer to.
    pub fn horizon(&self) -> SunHorizon {
        self.horizon
    }

    /// Returns `sunset - sunrise`; always positive.
    pub fn daylight(&self) -> TimeDelta {
        self.sunset.clone() - self.sunrise.clone()
    }
}
