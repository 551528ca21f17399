//! One sunset event.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, Component, DatePerhapsTime, Event, EventLike};
use sunsets_solar::{Location, SunTimes};

use crate::description::describe_times;

/// Length of every sunset event, in minutes.
pub const EVENT_MINUTES: i64 = 30;

/// A calendar event starting at sunset.
#[derive(Debug, Clone, PartialEq)]
pub struct SunsetEvent {
    date: NaiveDate,
    title: String,
    start: DateTime<Tz>,
    duration: TimeDelta,
    description: String,
    uid: String,
}

impl SunsetEvent {
    /// Builds the event for one day's sun times at `location`.
    ///
    /// The start is the sunset instant itself; the title is
    /// `"Sunset — <name>"` and the description comes from
    /// [`describe_times`](crate::describe_times). The UID is keyed on the
    /// resolved day, which differs from the start's local date when the
    /// sunset falls after midnight.
    pub fn new(location: &Location, times: &SunTimes) -> Self {
        let date = times.date();
        Self {
            date,
            title: format!("Sunset — {}", location.name()),
            description: describe_times(location, times),
            duration: TimeDelta::minutes(EVENT_MINUTES),
            start: times.sunset().clone(),
            uid: format!("sunset-{date}-{}@sunsets", slug(location.name())),
        }
    }

    /// Returns the day this event belongs to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the start instant (the sunset).
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Returns the event length.
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Returns `start + duration`.
    pub fn end(&self) -> DateTime<Tz> {
        self.start.clone() + self.duration
    }

    /// Returns the multi-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the stable UID, derived from the date and location name.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Converts to an `icalendar` event with UTC `DTSTART`/`DTEND`.
    pub fn to_ical(&self) -> Event {
        Event::new()
            .uid(&self.uid)
            .summary(&self.title)
            .description(&self.description)
            .starts(utc(&self.start))
            .ends(utc(&self.end()))
            .done()
    }
}

/// `YYYYMMDDTHHMMSSZ`; needs no VTIMEZONE to resolve.
fn utc(instant: &DateTime<Tz>) -> DatePerhapsTime {
    DatePerhapsTime::DateTime(CalendarDateTime::Utc(instant.with_timezone(&Utc)))
}

/// Lowercase ASCII alphanumerics, runs of anything else collapsed to `-`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}
