//! Next departures from a single station.
//!
//! Answers "when does my next train actually leave?" by combining a static
//! weekday timetable with a live delay feed, and shows a campus shuttle
//! board and the operator's service status alongside it.
//!
//! Every live source degrades: if the delay feed or the status page can't
//! be reached, the board is still printed from scheduled times.

pub mod availability;
pub mod config;
pub mod display;
pub mod domain;
pub mod projection;
pub mod realtime;
pub mod status;
pub mod timetable;
