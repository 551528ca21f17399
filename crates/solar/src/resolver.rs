//! Sun-time resolution: the resolver seam and its two implementations.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use solar_positioning::time::DeltaT;
use solar_positioning::{SunriseResult, spa};
use tracing::debug;

use crate::error::SolarError;
use crate::horizon::SunHorizon;
use crate::location::Location;
use crate::noaa::{self, Direction, NoTransit};
use crate::times::SunTimes;

/// Computes sunrise and sunset for a location on a local calendar date.
pub trait SolarResolver {
    /// Resolves the sun times of `date` at `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolarError`] naming why no sunrise/sunset pair exists.
    fn sun_times(&self, location: &Location, date: NaiveDate) -> Result<SunTimes, SolarError>;
}

impl<R: SolarResolver + ?Sized> SolarResolver for &R {
    fn sun_times(&self, location: &Location, date: NaiveDate) -> Result<SunTimes, SolarError> {
        (**self).sun_times(location, date)
    }
}

/// Selects which solar algorithm backs the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolarAlgorithm {
    /// NOAA equations with horizon refraction.
    #[default]
    Noaa,
    /// NREL Solar Position Algorithm.
    Spa,
}

impl SolarAlgorithm {
    /// Returns the configuration name of this algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noaa => "noaa",
            Self::Spa => "spa",
        }
    }

    /// Builds a resolver using this algorithm and `horizon`.
    pub fn resolver(self, horizon: SunHorizon) -> Box<dyn SolarResolver> {
        match self {
            Self::Noaa => Box::new(NoaaResolver::new().with_horizon(horizon)),
            Self::Spa => Box::new(SpaResolver::new().with_horizon(horizon)),
        }
    }
}

/// Resolver backed by the NOAA sunrise/sunset equations.
///
/// The sunrise and sunset are the crossings whose local date is the
/// requested day. When the sunset of a long summer day only happens after
/// local midnight, the crossing from the next morning is taken instead of
/// the one from the previous evening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoaaResolver {
    horizon: SunHorizon,
}

impl NoaaResolver {
    /// Creates a resolver for standard sunrise/sunset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizon used for rise/set events.
    pub fn with_horizon(mut self, horizon: SunHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Returns the configured horizon.
    pub fn horizon(&self) -> SunHorizon {
        self.horizon
    }

    fn crossing(
        &self,
        location: &Location,
        base: NaiveDate,
        requested: NaiveDate,
        direction: Direction,
    ) -> Result<DateTime<Utc>, SolarError> {
        noaa::transit(
            location.latitude(),
            location.longitude(),
            base,
            self.horizon.zenith(),
            direction,
        )
        .map_err(|never| match never {
            NoTransit::AlwaysAbove => SolarError::PolarDay { date: requested },
            NoTransit::AlwaysBelow => SolarError::PolarNight { date: requested },
        })
    }

    /// Returns the crossing on local `date` and the UTC base day it came from.
    fn local_crossing(
        &self,
        location: &Location,
        date: NaiveDate,
        direction: Direction,
    ) -> Result<(NaiveDate, DateTime<Utc>), SolarError> {
        let at = self.crossing(location, date, date, direction)?;
        let local = at.with_timezone(&location.timezone()).date_naive();
        let base = match local.cmp(&date) {
            Ordering::Equal => return Ok((date, at)),
            Ordering::Less => date.succ_opt(),
            Ordering::Greater => date.pred_opt(),
        }
        .ok_or(SolarError::DateOutOfRange { date })?;
        Ok((base, self.crossing(location, base, date, direction)?))
    }
}

impl SolarResolver for NoaaResolver {
    fn sun_times(&self, location: &Location, date: NaiveDate) -> Result<SunTimes, SolarError> {
        let (_, sunrise) = self.local_crossing(location, date, Direction::Rising)?;
        let (base, mut sunset) = self.local_crossing(location, date, Direction::Setting)?;
        if sunset <= sunrise {
            let next = base.succ_opt().ok_or(SolarError::DateOutOfRange { date })?;
            sunset = self.crossing(location, next, date, Direction::Setting)?;
        }

        let tz = location.timezone();
        let (sunrise, sunset) = (sunrise.with_timezone(&tz), sunset.with_timezone(&tz));
        debug!(
            location = location.name(),
            %date,
            %sunrise,
            %sunset,
            "resolved sun times"
        );
        Ok(SunTimes::new(date, sunrise, sunset)?.with_horizon(self.horizon))
    }
}

/// Resolver backed by the NREL Solar Position Algorithm.
///
/// Each date is evaluated as the location's local calendar day: local noon
/// anchors the computation, ΔT is estimated from the date, and the resulting
/// instants come back zoned to the location's time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaResolver {
    horizon: SunHorizon,
}

impl SpaResolver {
    /// Creates a resolver for standard sunrise/sunset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizon used for rise/set events.
    pub fn with_horizon(mut self, horizon: SunHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Returns the configured horizon.
    pub fn horizon(&self) -> SunHorizon {
        self.horizon
    }

    fn solve(
        &self,
        location: &Location,
        day: NaiveDate,
        requested: NaiveDate,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>), SolarError> {
        let tz = location.timezone();
        let local_noon = day
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| tz.from_local_datetime(&noon).earliest())
            .ok_or(SolarError::NonexistentLocalTime { date: day })?;
        let delta_t = DeltaT::estimate_from_date_like(day)?;

        let result = spa::sunrise_sunset_for_horizon(
            local_noon,
            location.latitude(),
            location.longitude(),
            delta_t,
            self.horizon.to_spa(),
        )?;

        match result {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => Ok((sunrise, sunset)),
            SunriseResult::AllDay { .. } => Err(SolarError::PolarDay { date: requested }),
            SunriseResult::AllNight { .. } => Err(SolarError::PolarNight { date: requested }),
        }
    }
}

impl SolarResolver for SpaResolver {
    fn sun_times(&self, location: &Location, date: NaiveDate) -> Result<SunTimes, SolarError> {
        let (sunrise, mut sunset) = self.solve(location, date, date)?;
        if sunset <= sunrise {
            // This day's sunset is after midnight; SPA files it under tomorrow.
            let next = date.succ_opt().ok_or(SolarError::DateOutOfRange { date })?;
            sunset = self.solve(location, next, date)?.1;
        }

        debug!(
            location = location.name(),
            %date,
            %sunrise,
            %sunset,
            "resolved sun times"
        );
        Ok(SunTimes::new(date, sunrise, sunset)?.with_horizon(self.horizon))
    }
}
