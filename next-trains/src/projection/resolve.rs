//! Matching timetable entries to delay observations.
//!
//! The feed's train numbers don't always equal the timetable's. An exact
//! match wins; otherwise the entry's numeric stem (its train number minus
//! a trailing category letter) is searched for among the feed's keys.
//!
//! The stem search can match more than one key, and can match the wrong
//! train outright ("504" is contained in "1504T"). Candidates are ranked so
//! the choice is at least deterministic: keys starting with the stem beat
//! keys merely containing it, then shorter keys win, then lexical order.

use chrono::Duration;
use tracing::debug;

use crate::domain::TripId;
use crate::realtime::DelayObservations;

/// How a delay was found for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayMatch<'a> {
    /// The feed had the entry's exact train number.
    Exact,
    /// The feed had a key containing the entry's stem.
    Fuzzy { key: &'a str },
    /// No observation; assumed on time.
    Unmatched,
}

/// A resolved delay and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub delay: Duration,
    pub matched: DelayMatch<'a>,
}

/// Looks up delays for timetable entries in one run's observations.
#[derive(Debug, Clone, Copy)]
pub struct DelayResolver<'a> {
    observations: &'a DelayObservations,
    suffixes: &'a [char],
}

impl<'a> DelayResolver<'a> {
    /// Create a resolver over `observations`, stripping `suffixes` from
    /// train numbers before fuzzy matching.
    pub fn new(observations: &'a DelayObservations, suffixes: &'a [char]) -> Self {
        Self {
            observations,
            suffixes,
        }
    }

    /// The delay for `trip_id`, or zero if nothing matches.
    pub fn resolve(&self, trip_id: &TripId) -> Duration {
        self.resolve_detailed(trip_id).delay
    }

    /// The delay for `trip_id` along with how it was matched.
    pub fn resolve_detailed(&self, trip_id: &TripId) -> Resolution<'a> {
        if let Some(delay) = self.observations.get(trip_id.as_str()) {
            return Resolution {
                delay,
                matched: DelayMatch::Exact,
            };
        }

        let stem = trip_id.stem(self.suffixes);
        if let Some((key, delay)) = self.best_fuzzy_candidate(stem) {
            debug!(
                trip_id = %trip_id,
                matched_key = key,
                delay_secs = delay.num_seconds(),
                "delay matched on train number stem"
            );
            return Resolution {
                delay,
                matched: DelayMatch::Fuzzy { key },
            };
        }

        Resolution {
            delay: Duration::zero(),
            matched: DelayMatch::Unmatched,
        }
    }

    fn best_fuzzy_candidate(&self, stem: &str) -> Option<(&'a str, Duration)> {
        if stem.is_empty() {
            return None;
        }

        self.observations
            .iter()
            .filter_map(|(key, delay)| {
                let rank = if key.starts_with(stem) {
                    0
                } else if key.contains(stem) {
                    1
                } else {
                    return None;
                };
                Some(((rank, key.len(), key), delay))
            })
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|((_, _, key), delay)| (key, delay))
    }
}
