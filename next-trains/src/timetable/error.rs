//! Timetable loading errors.

use std::path::PathBuf;

use crate::domain::TripId;

/// Errors from loading or validating timetable data.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// The timetable file couldn't be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data isn't valid timetable JSON (including bad "HH:MM" times)
    #[error("timetable JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share a train number
    #[error("duplicate trip id {0}")]
    DuplicateTrip(TripId),

    /// A shuttle window ends before it starts
    #[error("shuttle window {start}-{end} ends before it starts")]
    InvalidWindow { start: String, end: String },
}
