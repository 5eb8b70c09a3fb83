//! Train number → delay lookup built from feed records.

use std::collections::HashMap;

use chrono::Duration;
use tracing::debug;

use super::error::FeedError;
use super::types::TrainRecord;

/// Which feed records are relevant to this board.
///
/// A record is only rejected when it positively names a different railway
/// or direction; records that omit those fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub railway: Option<String>,
    pub rail_direction: Option<String>,
}

impl RecordFilter {
    /// Whether a record should contribute to the observation map.
    pub fn accepts(&self, record: &TrainRecord) -> bool {
        fn matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
            match (wanted, actual) {
                (Some(wanted), Some(actual)) => wanted == actual,
                _ => true,
            }
        }

        matches(&self.railway, &record.railway)
            && matches(&self.rail_direction, &record.rail_direction)
    }
}

/// Delay observations for one run, keyed by the feed's train numbers.
///
/// Delays are never negative. Duplicate train numbers keep the last one
/// inserted. An empty map means either "no trains reported" or "feed
/// unavailable"; both mean every departure is shown as scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayObservations {
    delays: HashMap<String, Duration>,
}

impl DelayObservations {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delay for a train number, replacing any earlier one.
    /// Negative delays are stored as zero.
    pub fn insert(&mut self, train_number: impl Into<String>, delay: Duration) {
        self.delays
            .insert(train_number.into(), delay.max(Duration::zero()));
    }

    /// Build the map from feed records, dropping irrelevant ones and any
    /// without a train number.
    pub fn from_records<I>(records: I, filter: &RecordFilter) -> Self
    where
        I: IntoIterator<Item = TrainRecord>,
    {
        let mut observations = Self::new();

        for record in records {
            if !filter.accepts(&record) {
                debug!(
                    train_number = record.train_number.as_deref().unwrap_or("-"),
                    railway = record.railway.as_deref().unwrap_or("-"),
                    direction = record.rail_direction.as_deref().unwrap_or("-"),
                    "skipping record for another line or direction"
                );
                continue;
            }

            let train_number = match record.train_number {
                Some(n) if !n.trim().is_empty() => n,
                _ => continue,
            };

            // Out-of-range values are treated like a missing delay
            let delay =
                Duration::try_seconds(record.delay.unwrap_or(0)).unwrap_or_else(Duration::zero);
            observations.insert(train_number, delay);
        }

        observations
    }

    /// Parse a feed response body (a JSON array of train objects).
    ///
    /// A body that isn't a JSON array is an error; individual elements that
    /// don't have the expected shape are skipped.
    pub fn from_json(body: &str, filter: &RecordFilter) -> Result<Self, FeedError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| FeedError::json(e, body))?;

        let records = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<TrainRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(error = %e, "skipping malformed train record");
                    None
                }
            });

        Ok(Self::from_records(records, filter))
    }

    /// Exact lookup by train number.
    pub fn get(&self, train_number: &str) -> Option<Duration> {
        self.delays.get(train_number).copied()
    }

    /// Iterate over (train number, delay) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.delays.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    /// Returns true if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Duration)> for DelayObservations {
    fn from_iter<I: IntoIterator<Item = (K, Duration)>>(iter: I) -> Self {
        let mut observations = Self::new();
        for (train_number, delay) in iter {
            observations.insert(train_number, delay);
        }
        observations
    }
}
