//! Departure ranking.
//!
//! Projects every timetable entry onto the calendar, applies its delay,
//! keeps the ones still to leave, and orders them by when they'll actually
//! go.

use chrono::Duration;

use crate::domain::RailTime;
use crate::realtime::DelayObservations;
use crate::timetable::TimetableEntry;

use super::config::ProjectionConfig;
use super::resolve::DelayResolver;

/// A timetable entry placed on the calendar with its delay applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedDeparture<'a> {
    pub entry: &'a TimetableEntry,

    /// Resolved delay, never negative.
    pub delay: Duration,

    /// Timetabled departure on the run's calendar.
    pub scheduled: RailTime,

    /// `scheduled + delay`.
    pub effective: RailTime,
}

impl ProjectedDeparture<'_> {
    /// Delay in whole minutes, truncated: 59 seconds late is still on time.
    pub fn delay_minutes(&self) -> i64 {
        self.delay.num_minutes()
    }

    /// Whether the displayed delay is zero minutes.
    pub fn is_on_time(&self) -> bool {
        self.delay_minutes() == 0
    }
}

/// Project every entry relative to `now`, in timetable order, without
/// filtering.
pub fn project_departures<'a>(
    entries: &'a [TimetableEntry],
    observations: &DelayObservations,
    now: RailTime,
    config: &ProjectionConfig,
) -> Vec<ProjectedDeparture<'a>> {
    let resolver = DelayResolver::new(observations, &config.category_suffixes);

    entries
        .iter()
        .map(|entry| {
            let delay = resolver.resolve(&entry.trip_id);
            let scheduled = config.rollover.project(entry.scheduled, now);
            let effective = scheduled.checked_add(delay).unwrap_or(scheduled);
            ProjectedDeparture {
                entry,
                delay,
                scheduled,
                effective,
            }
        })
        .collect()
}

/// The next `config.limit` departures after `now`.
///
/// Only departures whose effective time is strictly after `now` are kept.
/// They're sorted by effective time; the sort is stable, so departures at
/// the same effective time keep their timetable order.
pub fn rank_departures<'a>(
    entries: &'a [TimetableEntry],
    observations: &DelayObservations,
    now: RailTime,
    config: &ProjectionConfig,
) -> Vec<ProjectedDeparture<'a>> {
    let mut upcoming: Vec<_> = project_departures(entries, observations, now, config)
        .into_iter()
        .filter(|d| d.effective > now)
        .collect();

    upcoming.sort_by_key(|d| d.effective);
    upcoming.truncate(config.limit);
    upcoming
}
