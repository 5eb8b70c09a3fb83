//! Schedule projection engine.
//!
//! Answers "which departures come next, and when will they actually go?"
//! for a fixed timetable, a point in time and a set of delay observations:
//!
//! 1. each entry's delay is resolved against the observations
//!    (exact train number first, then a deterministic fuzzy match)
//! 2. its time of day is placed on the calendar, rolling late-night
//!    queries over to tomorrow's early departures
//! 3. future departures are sorted by effective time and truncated
//!
//! The shuttle board is a separate, simpler merge of listed trips and
//! high-frequency windows, with no delay data.

mod config;
mod project;
mod rank;
mod resolve;
mod shuttle;

pub use config::{DEFAULT_CATEGORY_SUFFIXES, DEFAULT_LIMIT, ProjectionConfig};
pub use project::{DEFAULT_EARLY_HOUR_LIMIT, DEFAULT_LATE_QUERY_AFTER_HOUR, RolloverRule};
pub use rank::{ProjectedDeparture, project_departures, rank_departures};
pub use resolve::{DelayMatch, DelayResolver, Resolution};
pub use shuttle::{ShuttleBoardItem, active_window, shuttle_board};
