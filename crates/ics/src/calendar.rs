//! Ordered sunset events and the per-date driver that builds them.

use chrono_tz::Tz;
use icalendar::Calendar;
use sunsets_calendar::DateRange;
use sunsets_solar::{Location, SolarResolver};
use tracing::{debug, info, info_span};

use crate::error::IcsError;
use crate::event::SunsetEvent;

/// Sunset events for one location, kept in insertion (date) order.
#[derive(Debug, Clone)]
pub struct SunsetCalendar {
    name: String,
    timezone: Tz,
    events: Vec<SunsetEvent>,
}

impl SunsetCalendar {
    /// Creates an empty calendar named after `location`.
    pub fn new(location: &Location) -> Self {
        Self {
            name: format!("Sunsets — {}", location.name()),
            timezone: location.timezone(),
            events: Vec::new(),
        }
    }

    /// Creates an empty calendar with room for `capacity` events.
    pub fn with_capacity(location: &Location, capacity: usize) -> Self {
        let mut calendar = Self::new(location);
        calendar.events.reserve_exact(capacity);
        calendar
    }

    /// Appends an event after all existing ones.
    pub fn push(&mut self, event: SunsetEvent) {
        self.events.push(event);
    }

    /// Returns the calendar display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the events in insertion order.
    pub fn events(&self) -> &[SunsetEvent] {
        &self.events
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events have been added.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Converts to an `icalendar` calendar, one VEVENT per event.
    pub fn to_ical(&self) -> Calendar {
        let mut calendar = Calendar::new();
        calendar.name(&self.name).timezone(self.timezone.name());
        for event in &self.events {
            calendar.push(event.to_ical());
        }
        calendar.done()
    }

    /// Serializes to iCalendar text.
    pub fn to_ics_string(&self) -> String {
        self.to_ical().to_string()
    }
}

/// Builds one sunset event per date of `range`, in ascending date order.
///
/// Stops at the first date the resolver cannot handle; nothing after that
/// date is computed and no partial calendar is returned.
///
/// # Errors
///
/// Returns [`IcsError::SunTimes`] naming the location, the failing date and
/// the resolver's error.
pub fn build_calendar<R>(
    location: &Location,
    range: &DateRange,
    resolver: &R,
) -> Result<SunsetCalendar, IcsError>
where
    R: SolarResolver + ?Sized,
{
    let _span = info_span!("build_calendar", location = location.name(), %range).entered();
    let mut calendar = SunsetCalendar::with_capacity(location, range.n_days());

    for date in range {
        let times = resolver.sun_times(location, date).map_err(|source| {
            debug!(%date, error = %source, "sun time resolution failed");
            IcsError::SunTimes {
                location: location.name().to_string(),
                date,
                source,
            }
        })?;

        let event = SunsetEvent::new(location, &times);
        if calendar.is_empty() {
            info!("sample event description:\n{}", event.description());
        }
        debug!(%date, start = %event.start(), "event added");
        calendar.push(event);
    }

    info!(n_events = calendar.len(), "calendar built");
    Ok(calendar)
}
