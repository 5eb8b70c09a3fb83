//! Shuttle bus timetable.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{format_time_of_day, hhmm};

use super::TimetableError;

/// One discrete shuttle run. Shuttles have no real-time feed, so these
/// times are always shown as scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryTrip {
    /// Departure from the origin stop.
    #[serde(with = "hhmm")]
    pub depart: NaiveTime,

    /// Arrival at the destination stop.
    #[serde(with = "hhmm")]
    pub arrive: NaiveTime,
}

/// A period during which the shuttle runs on a fixed cadence instead of
/// to a listed timetable. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuttleWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,

    #[serde(with = "hhmm")]
    pub end: NaiveTime,

    /// Human-readable cadence, e.g. "every 5-10 min".
    pub interval: String,
}

impl ShuttleWindow {
    /// Whether `now` falls within this window, bounds included.
    pub fn contains(&self, now: NaiveTime) -> bool {
        self.start <= now && now <= self.end
    }
}

/// A shuttle route's timetable for one operating day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShuttleTimetable {
    /// Name of the origin stop.
    pub origin: String,

    /// Name of the destination stop.
    pub destination: String,

    /// Discrete trips, in chronological order.
    trips: Vec<AuxiliaryTrip>,

    /// High-frequency windows, in chronological order.
    windows: Vec<ShuttleWindow>,
}

impl ShuttleTimetable {
    /// Build a shuttle timetable, rejecting windows that end before they start.
    ///
    /// Trips are expected in chronological order; that is not checked.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        trips: Vec<AuxiliaryTrip>,
        windows: Vec<ShuttleWindow>,
    ) -> Result<Self, TimetableError> {
        let timetable = Self {
            origin: origin.into(),
            destination: destination.into(),
            trips,
            windows,
        };
        timetable.validate()?;
        Ok(timetable)
    }

    /// Parse a shuttle timetable from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let timetable: Self = serde_json::from_str(json)?;
        timetable.validate()?;
        Ok(timetable)
    }

    fn validate(&self) -> Result<(), TimetableError> {
        if let Some(window) = self.windows.iter().find(|w| w.end < w.start) {
            return Err(TimetableError::InvalidWindow {
                start: format_time_of_day(window.start),
                end: format_time_of_day(window.end),
            });
        }
        Ok(())
    }

    /// Returns the discrete trips.
    pub fn trips(&self) -> &[AuxiliaryTrip] {
        &self.trips
    }

    /// Returns the high-frequency windows.
    pub fn windows(&self) -> &[ShuttleWindow] {
        &self.windows
    }
}
