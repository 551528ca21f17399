//! # sunsets-calendar
//!
//! Inclusive Gregorian date ranges and ascending day iteration.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"DateRange::year()"| B["DateRange"]
//!     C["(start, end)"] -->|"DateRange::new()"| B
//!     B -->|".iter()"| D["DateIter"]
//!     D -->|"next()"| E["NaiveDate, ascending"]
//!     A -->|"days_in_year()"| F["365 / 366"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sunsets_calendar::{DateRange, days_in_year};
//!
//! let range = DateRange::year(2028).unwrap();
//! assert_eq!(range.n_days(), days_in_year(2028));
//!
//! for date in &range {
//!     // Jan 1 ..= Dec 31, leap day included
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `range` | Validated inclusive date range |
//! | `sequence` | Lazy ascending iterator over a range |
//! | `year` | Leap-year and year-length helpers |
//! | `error` | Error types |

mod error;
mod range;
mod sequence;
mod year;

pub use error::CalendarError;
pub use range::DateRange;
pub use sequence::DateIter;
pub use year::{days_in_year, is_leap_year};
