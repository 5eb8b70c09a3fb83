//! Shuttle board: discrete trips merged with high-frequency windows.

use chrono::{NaiveTime, Timelike};

use crate::timetable::{AuxiliaryTrip, ShuttleTimetable, ShuttleWindow};

/// One line on the shuttle board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuttleBoardItem<'a> {
    /// The shuttle is running on a cadence right now.
    ShuttleMode(&'a ShuttleWindow),
    /// A listed trip still to depart.
    Trip(&'a AuxiliaryTrip),
    /// A later high-frequency window.
    UpcomingWindow(&'a ShuttleWindow),
}

/// The first window containing `now`. Overlapping windows resolve to
/// whichever is listed first.
pub fn active_window(timetable: &ShuttleTimetable, now: NaiveTime) -> Option<&ShuttleWindow> {
    let now = to_minute(now);
    timetable.windows().iter().find(|w| w.contains(now))
}

/// Build the shuttle board for `now`, at most `limit` items.
///
/// In order: the active window (if any), then trips departing at or after
/// `now` in timetable order, then windows starting after `now` in
/// timetable order. Nothing is re-sorted across the three groups; trips are
/// assumed to be listed chronologically.
///
/// Shuttle times have minute resolution, so `now` is truncated to the
/// minute: a trip at 08:00 is still shown at 08:00:30.
pub fn shuttle_board(
    timetable: &ShuttleTimetable,
    now: NaiveTime,
    limit: usize,
) -> Vec<ShuttleBoardItem<'_>> {
    let now = to_minute(now);

    let active = active_window(timetable, now).map(ShuttleBoardItem::ShuttleMode);

    let trips = timetable
        .trips()
        .iter()
        .filter(|trip| trip.depart >= now)
        .map(ShuttleBoardItem::Trip);

    let upcoming = timetable
        .windows()
        .iter()
        .filter(|w| w.start > now)
        .map(ShuttleBoardItem::UpcomingWindow);

    active.into_iter().chain(trips).chain(upcoming).take(limit).collect()
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_time_of_day;

    fn t(s: &str) -> NaiveTime {
        parse_time_of_day(s).unwrap()
    }

    fn trip(depart: &str, arrive: &str) -> AuxiliaryTrip {
        AuxiliaryTrip {
            depart: t(depart),
            arrive: t(arrive),
        }
    }

    fn window(start: &str, end: &str, interval: &str) -> ShuttleWindow {
        ShuttleWindow {
            start: t(start),
            end: t(end),
            interval: interval.to_string(),
        }
    }

    fn sample() -> ShuttleTimetable {
        ShuttleTimetable::new(
            "駅",
            "キャンパス",
            vec![
                trip("07:30", "07:52"),
                trip("07:45", "08:07"),
                trip("10:45", "11:05"),
                trip("11:15", "11:35"),
            ],
            vec![
                window("08:00", "10:30", "5-10 min"),
                window("12:00", "13:30", "10 min"),
                window("16:00", "18:30", "10-15 min"),
            ],
        )
        .unwrap()
    }

    fn describe(items: &[ShuttleBoardItem<'_>]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                ShuttleBoardItem::ShuttleMode(w) => format!("mode {}", w.start.format("%H:%M")),
                ShuttleBoardItem::Trip(trip) => format!("trip {}", trip.depart.format("%H:%M")),
                ShuttleBoardItem::UpcomingWindow(w) => {
                    format!("window {}", w.start.format("%H:%M"))
                }
            })
            .collect()
    }

    #[test]
    fn before_first_window_lists_trips() {
        let timetable = sample();
        let board = shuttle_board(&timetable, t("07:40"), 3);
        assert_eq!(describe(&board), vec!["trip 07:45", "trip 10:45", "trip 11:15"]);
    }

    #[test]
    fn active_window_takes_first_slot() {
        let timetable = sample();
        let board = shuttle_board(&timetable, t("09:00"), 3);
        assert_eq!(describe(&board), vec!["mode 08:00", "trip 10:45", "trip 11:15"]);
    }

    #[test]
    fn window_bounds_inclusive() {
        let timetable = sample();
        assert!(active_window(&timetable, t("08:00")).is_some());
        assert!(active_window(&timetable, t("10:30")).is_some());
        assert!(active_window(&timetable, t("10:31")).is_none());
    }

    #[test]
    fn seconds_are_ignored() {
        let timetable = sample();
        let now = NaiveTime::from_hms_opt(10, 30, 45).unwrap();
        assert!(active_window(&timetable, now).is_some());

        let now = NaiveTime::from_hms_opt(10, 45, 30).unwrap();
        let board = shuttle_board(&timetable, now, 1);
        assert_eq!(describe(&board), vec!["trip 10:45"]);
    }

    #[test]
    fn trips_exhausted_fill_with_windows() {
        let timetable = sample();
        let board = shuttle_board(&timetable, t("11:20"), 3);
        assert_eq!(describe(&board), vec!["window 12:00", "window 16:00"]);
    }

    #[test]
    fn active_then_upcoming_windows() {
        let timetable = sample();
        let board = shuttle_board(&timetable, t("12:30"), 3);
        assert_eq!(describe(&board), vec!["mode 12:00", "window 16:00"]);
    }

    #[test]
    fn trip_at_now_included() {
        let timetable = sample();
        let board = shuttle_board(&timetable, t("07:45"), 1);
        assert_eq!(describe(&board), vec!["trip 07:45"]);
    }

    #[test]
    fn end_of_day_is_empty() {
        let timetable = sample();
        assert!(shuttle_board(&timetable, t("23:00"), 3).is_empty());
    }

    #[test]
    fn limit_zero_is_empty() {
        let timetable = sample();
        assert!(shuttle_board(&timetable, t("09:00"), 0).is_empty());
    }

    #[test]
    fn overlapping_windows_first_listed_wins() {
        let timetable = ShuttleTimetable::new(
            "駅",
            "キャンパス",
            vec![],
            vec![
                window("09:00", "11:00", "first"),
                window("08:00", "12:00", "second"),
            ],
        )
        .unwrap();

        let active = active_window(&timetable, t("10:00")).unwrap();
        assert_eq!(active.interval, "first");

        let active = active_window(&timetable, t("08:30")).unwrap();
        assert_eq!(active.interval, "second");
    }

    #[test]
    fn builtin_shuttle_midday() {
        let timetable = ShuttleTimetable::builtin().unwrap();
        let board = shuttle_board(&timetable, t("12:15"), 3);
        assert_eq!(
            describe(&board),
            vec!["mode 12:00", "trip 14:00", "trip 14:30"]
        );
    }
}
