//! Domain types for the departure board.
//!
//! Value types that enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod category;
mod time;
mod trip_id;

pub use category::Category;
pub use time::{RailTime, TimeError, format_time_of_day, hhmm, parse_time_of_day};
pub use trip_id::{InvalidTripId, TripId};
