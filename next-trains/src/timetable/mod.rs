//! Static timetable data.
//!
//! The main line timetable is a list of departures keyed by train number.
//! The shuttle timetable mixes discrete trips with "high-frequency windows"
//! during which the bus runs on a fixed cadence instead.
//!
//! Both ship as built-in JSON and can be replaced by a file at runtime.

mod error;
mod shuttle;

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, TripId, hhmm};

pub use error::TimetableError;
pub use shuttle::{AuxiliaryTrip, ShuttleTimetable, ShuttleWindow};

const BUILTIN_TIMETABLE: &str = include_str!("../../data/hachioji_up_weekday.json");
const BUILTIN_SHUTTLE: &str = include_str!("../../data/shuttle_weekday.json");

/// One scheduled departure.
///
/// Field names on the wire follow the hand-written timetable files
/// (`time`, `type`, `destination`, `train_number`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Train number; the join key against real-time delay reports.
    #[serde(rename = "train_number")]
    pub trip_id: TripId,

    /// Scheduled departure, time of day only.
    #[serde(rename = "time", with = "hhmm")]
    pub scheduled: NaiveTime,

    /// Service type, display only.
    #[serde(rename = "type")]
    pub category: Category,

    /// Destination, display only.
    pub destination: String,
}

impl TimetableEntry {
    /// Create a new entry.
    pub fn new(
        trip_id: TripId,
        scheduled: NaiveTime,
        category: Category,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            trip_id,
            scheduled,
            category,
            destination: destination.into(),
        }
    }
}

/// A validated single-station, single-direction timetable.
///
/// Entries keep their source order, which is used to break ties when two
/// departures end up at the same effective time. They need not be sorted.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    /// Build a timetable, rejecting duplicate train numbers.
    pub fn new(entries: Vec<TimetableEntry>) -> Result<Self, TimetableError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.trip_id) {
                return Err(TimetableError::DuplicateTrip(entry.trip_id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a timetable from a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let entries: Vec<TimetableEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a timetable from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }

    /// The built-in Hachiōji up-line weekday timetable.
    pub fn builtin() -> Result<Self, TimetableError> {
        Self::from_json_str(BUILTIN_TIMETABLE)
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the timetable has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ShuttleTimetable {
    /// The built-in weekday shuttle timetable.
    pub fn builtin() -> Result<Self, TimetableError> {
        Self::from_json_str(BUILTIN_SHUTTLE)
    }

    /// Load a shuttle timetable from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }
}

fn read_file(path: &Path) -> Result<String, TimetableError> {
    std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
        path: path.to_path_buf(),
        source,
    })
}
