//! Projection of times of day onto the run's calendar.

use chrono::{NaiveTime, Timelike};

use crate::domain::RailTime;

/// Hour before which a departure may belong to the previous operating day.
pub const DEFAULT_EARLY_HOUR_LIMIT: u32 = 4;

/// Hour after which a query looks ahead across midnight.
pub const DEFAULT_LATE_QUERY_AFTER_HOUR: u32 = 20;

/// Decides when an early-morning departure belongs to tomorrow.
///
/// A departure scheduled before `early_hour_limit` (e.g. the 00:19 last
/// train) is moved to the next calendar day when the query runs after
/// `late_query_after_hour`. Otherwise a late-evening query would see it as
/// having left nearly a day ago. Both comparisons are strict and on whole
/// hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverRule {
    pub early_hour_limit: u32,
    pub late_query_after_hour: u32,
}

impl RolloverRule {
    /// Create a rule with the given thresholds.
    pub fn new(early_hour_limit: u32, late_query_after_hour: u32) -> Self {
        Self {
            early_hour_limit,
            late_query_after_hour,
        }
    }

    /// Whether a departure at `scheduled` rolls over for a query at `now`.
    pub fn applies(&self, scheduled: NaiveTime, now: RailTime) -> bool {
        scheduled.hour() < self.early_hour_limit && now.hour() > self.late_query_after_hour
    }

    /// Place a scheduled time of day on the calendar relative to `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use next_trains::domain::RailTime;
    /// use next_trains::projection::RolloverRule;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let last_train = NaiveTime::from_hms_opt(0, 19, 0).unwrap();
    /// let rule = RolloverRule::default();
    ///
    /// let late = RailTime::parse_hhmm("23:50", today).unwrap();
    /// assert_eq!(rule.project(last_train, late).date(), today.succ_opt().unwrap());
    ///
    /// let morning = RailTime::parse_hhmm("08:00", today).unwrap();
    /// assert_eq!(rule.project(last_train, morning).date(), today);
    /// ```
    pub fn project(&self, scheduled: NaiveTime, now: RailTime) -> RailTime {
        let same_day = RailTime::new(now.date(), scheduled);
        if self.applies(scheduled, now) {
            same_day.next_day().unwrap_or(same_day)
        } else {
            same_day
        }
    }
}

impl Default for RolloverRule {
    fn default() -> Self {
        Self::new(DEFAULT_EARLY_HOUR_LIMIT, DEFAULT_LATE_QUERY_AFTER_HOUR)
    }
}
