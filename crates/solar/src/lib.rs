//! # sunsets-solar
//!
//! Resolves local sunrise and sunset instants for a [`Location`] and a
//! calendar date.
//!
//! Two algorithms are available: the NOAA sunrise/sunset equations
//! ([`NoaaResolver`], the default) and the NREL Solar Position Algorithm from
//! the `solar-positioning` crate ([`SpaResolver`]). Time-zone rules come from
//! `chrono-tz`. The [`SolarResolver`] trait is the seam the calendar driver
//! depends on, so it can be exercised without the real algorithm.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use sunsets_solar::{Location, NoaaResolver, SolarResolver};
//!
//! let nyc = Location::new("New York, NY", 40.7128, -74.006, "America/New_York").unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let times = NoaaResolver::new().sun_times(&nyc, date).unwrap();
//! println!("{} -> {}", times.sunrise(), times.sunset());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `location` | Validated observer location with its time zone |
//! | `times` | Sunrise/sunset pair for one day |
//! | `horizon` | Rise/set horizon definitions |
//! | `noaa` | NOAA sunrise/sunset equations |
//! | `resolver` | `SolarResolver` trait, NOAA- and SPA-backed implementations |
//! | `error` | Error types |

mod error;
mod horizon;
mod location;
mod noaa;
mod resolver;
mod times;

pub use error::SolarError;
pub use horizon::SunHorizon;
pub use location::Location;
pub use resolver::{NoaaResolver, SolarAlgorithm, SolarResolver, SpaResolver};
pub use times::SunTimes;
