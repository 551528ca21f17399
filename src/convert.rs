//! Pure conversion functions: CLI flags and TOML config -> crate API types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use sunsets_calendar::DateRange;
use sunsets_solar::{Location, SolarAlgorithm, SunHorizon};

use crate::cli::GenerateArgs;
use crate::config::{LocationToml, SunsetsConfig};

/// Everything a generation run needs, validated.
#[derive(Debug)]
pub struct RunPlan {
    pub location: Location,
    pub range: DateRange,
    pub output: PathBuf,
    pub horizon: SunHorizon,
    pub algorithm: SolarAlgorithm,
}

/// Parses a horizon name string into the corresponding enum variant.
pub fn parse_horizon(s: &str) -> Result<SunHorizon> {
    match s.to_lowercase().as_str() {
        "sunrise-sunset" | "standard" => Ok(SunHorizon::SunriseSunset),
        "civil" => Ok(SunHorizon::Civil),
        "nautical" => Ok(SunHorizon::Nautical),
        "astronomical" => Ok(SunHorizon::Astronomical),
        other => bail!("unknown horizon: {other:?}"),
    }
}

/// Parses a solar algorithm name.
pub fn parse_algorithm(s: &str) -> Result<SolarAlgorithm> {
    match s.to_lowercase().as_str() {
        "noaa" => Ok(SolarAlgorithm::Noaa),
        "spa" | "nrel" => Ok(SolarAlgorithm::Spa),
        other => bail!("unknown solar algorithm: {other:?}"),
    }
}

/// Overwrites config values with every CLI flag that was given.
pub fn apply_overrides(config: &mut SunsetsConfig, args: &GenerateArgs) {
    if let Some(year) = args.year {
        config.year = Some(year);
    }
    if let Some(ref out) = args.out {
        config.output.path = out.clone();
    }
    if let Some(ref name) = args.name {
        config.location.name = name.clone();
    }
    if let Some(lat) = args.lat {
        config.location.latitude = lat;
    }
    if let Some(lon) = args.lon {
        config.location.longitude = lon;
    }
    if let Some(ref tz) = args.tz {
        config.location.timezone = tz.clone();
    }
    if let Some(ref horizon) = args.horizon {
        config.solar.horizon = horizon.clone();
    }
    if let Some(ref algorithm) = args.algorithm {
        config.solar.algorithm = algorithm.clone();
    }
}

/// Builds a validated [`Location`] from the TOML location section.
pub fn build_location(loc: &LocationToml) -> Result<Location> {
    Location::new(&loc.name, loc.latitude, loc.longitude, &loc.timezone)
        .context("invalid location")
}

/// Chooses the date range: an explicit `from..=to` wins, otherwise the
/// configured year, otherwise `current_year`.
pub fn build_range(
    year: Option<i32>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    current_year: i32,
) -> Result<DateRange> {
    match (from, to) {
        (Some(start), Some(end)) => DateRange::new(start, end).context("invalid date range"),
        (None, None) => {
            let year = year.unwrap_or(current_year);
            DateRange::year(year).context("invalid year")
        }
        _ => bail!("--from and --to must be given together"),
    }
}

/// Resolves the final run plan from the merged config and range flags.
pub fn build_plan(
    config: &SunsetsConfig,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    current_year: i32,
) -> Result<RunPlan> {
    Ok(RunPlan {
        location: build_location(&config.location)?,
        range: build_range(config.year, from, to, current_year)?,
        output: config.output.path.clone(),
        horizon: parse_horizon(&config.solar.horizon)?,
        algorithm: parse_algorithm(&config.solar.algorithm)?,
    })
}
