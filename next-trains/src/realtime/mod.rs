//! Real-time delay feed.
//!
//! Fetches running-train reports for one railway and reduces them to a
//! train number → delay map.
//!
//! Key characteristics of the feed:
//! - Train numbers don't always match the timetable's (numbering epochs
//!   and category suffixes drift), so lookups fall back to fuzzy matching
//!   in [`crate::projection`]
//! - Delays are in whole seconds; an absent delay means on time
//! - Any failure degrades to an empty map: the board then shows scheduled
//!   times

mod client;
mod error;
mod observations;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_OPERATOR, DEFAULT_RAILWAY, DEFAULT_TIMEOUT_SECS, DelayFeedClient,
    DelayFeedConfig,
};
pub use error::FeedError;
pub use observations::{DelayObservations, RecordFilter};
pub use types::TrainRecord;
