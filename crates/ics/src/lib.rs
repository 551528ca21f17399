//! # sunsets-ics
//!
//! Turns resolved sun times into sunset events and writes them as an
//! iCalendar document.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateRange"] -->|"build_calendar()"| B["SolarResolver"]
//!     B -->|"SunTimes"| C["SunsetEvent::new()"]
//!     C -->|"describe_times()"| D["description text"]
//!     C --> E["SunsetCalendar"]
//!     E -->|"write_calendar()"| F[".ics file"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `description` | Fixed-format daylight/sunrise/sunset text |
//! | `event` | One 30-minute event starting at sunset |
//! | `calendar` | Ordered event collection and the per-date driver |
//! | `writer` | Output path validation and file writing |
//! | `error` | Error types |

mod calendar;
mod description;
mod error;
mod event;
mod writer;

pub use calendar::{SunsetCalendar, build_calendar};
pub use description::{describe, describe_times, format_daylight};
pub use error::IcsError;
pub use event::{EVENT_MINUTES, SunsetEvent};
pub use writer::{validate_output_path, write_calendar};
