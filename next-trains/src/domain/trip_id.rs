//! Train number (trip identifier) type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid trip identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

/// A train number, used to join timetable entries with real-time reports.
///
/// Train numbers are free text. JR-style numbers carry a trailing letter
/// for the service category ("504T", "604C"), but nothing here relies on
/// that; the only validation is that the identifier is non-empty.
///
/// # Examples
///
/// ```
/// use next_trains::domain::TripId;
///
/// let id = TripId::new("504T").unwrap();
/// assert_eq!(id.as_str(), "504T");
/// assert_eq!(id.stem(&['T', 'C']), "504");
///
/// assert!(TripId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripId(String);

impl TripId {
    /// Create a trip id, rejecting empty strings.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidTripId> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidTripId {
                reason: "trip id cannot be empty",
            });
        }
        Ok(TripId(s))
    }

    /// Returns the trip id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier with one trailing category letter removed,
    /// if that letter is one of `suffixes`.
    pub fn stem(&self, suffixes: &[char]) -> &str {
        match self.0.chars().last() {
            Some(last) if suffixes.contains(&last) => &self.0[..self.0.len() - last.len_utf8()],
            _ => &self.0,
        }
    }
}

impl TryFrom<String> for TripId {
    type Error = InvalidTripId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TripId::new(s)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> Self {
        id.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
