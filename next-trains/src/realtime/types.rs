//! Delay feed response DTOs.
//!
//! These map directly to `odpt:Train` objects. Every field is optional
//! because the feed omits fields rather than sending nulls, and a record
//! missing its train number is simply unusable rather than an error.

use serde::Deserialize;

/// One running train as reported by the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainRecord {
    /// Train number, e.g. "504T". May not match the timetable's numbering.
    #[serde(rename = "odpt:trainNumber")]
    pub train_number: Option<String>,

    /// Delay in seconds. Absent means on time.
    #[serde(rename = "odpt:delay")]
    pub delay: Option<i64>,

    /// Railway the train is running on.
    #[serde(rename = "odpt:railway")]
    pub railway: Option<String>,

    /// Direction of travel (e.g. "odpt.RailDirection:Inbound").
    #[serde(rename = "odpt:railDirection")]
    pub rail_direction: Option<String>,

    /// Last station passed.
    #[serde(rename = "odpt:fromStation")]
    pub from_station: Option<String>,

    /// Next station, when between stations.
    #[serde(rename = "odpt:toStation")]
    pub to_station: Option<String>,
}
