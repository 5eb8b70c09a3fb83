//! Console rendering of the boards.
//!
//! Every function returns the text rather than printing it, so the binary
//! owns stdout and the layout can be tested directly.

use std::fmt::Write;

use crate::domain::{RailTime, format_time_of_day};
use crate::projection::{ProjectedDeparture, ShuttleBoardItem};
use crate::status::StatusReport;
use crate::timetable::ShuttleTimetable;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Current time and a heading for the train board.
pub fn render_header(now: RailTime, station: &str) -> String {
    format!(
        "Now: {}\nNext departures from {station}\n{}\n",
        now.to_hms_string(),
        rule()
    )
}

/// One numbered line per departure.
///
/// A departure without delay data looks exactly like one reported on time.
pub fn render_departures(departures: &[ProjectedDeparture<'_>]) -> String {
    if departures.is_empty() {
        return String::from("No more departures today.\n");
    }

    let mut out = String::new();

    for (i, departure) in departures.iter().enumerate() {
        let delay = if departure.is_on_time() {
            "on time".to_string()
        } else {
            format!("+{} min", departure.delay_minutes())
        };
        let _ = writeln!(
            out,
            "{}. {} -> {} [{}] {} ({delay})",
            i + 1,
            departure.scheduled,
            departure.effective,
            departure.entry.category,
            departure.entry.destination,
        );
    }

    out
}

/// The shuttle board: an active window, listed trips, upcoming windows.
pub fn render_shuttle(timetable: &ShuttleTimetable, items: &[ShuttleBoardItem<'_>]) -> String {
    let mut out = format!(
        "Shuttle {} -> {}\n{}\n",
        timetable.origin,
        timetable.destination,
        rule()
    );

    if items.is_empty() {
        out.push_str("No more shuttles today.\n");
        return out;
    }

    for item in items {
        let _ = match item {
            ShuttleBoardItem::ShuttleMode(window) => writeln!(
                out,
                "Running continuously until {} ({})",
                format_time_of_day(window.end),
                window.interval
            ),
            ShuttleBoardItem::Trip(trip) => writeln!(
                out,
                "{} -> {}",
                format_time_of_day(trip.depart),
                format_time_of_day(trip.arrive)
            ),
            ShuttleBoardItem::UpcomingWindow(window) => writeln!(
                out,
                "{}-{} continuous service ({})",
                format_time_of_day(window.start),
                format_time_of_day(window.end),
                window.interval
            ),
        };
    }

    out
}

/// Status page sections, skipping empty ones.
pub fn render_status(report: &StatusReport) -> String {
    if report.is_empty() {
        return String::from("No service status available.\n");
    }

    let mut out = String::new();
    for section in report.sections.iter().filter(|s| !s.lines.is_empty()) {
        let _ = writeln!(out, "[{}]", section.title);
        for line in &section.lines {
            let _ = writeln!(out, "  {}: {}", line.term, line.description);
        }
    }
    out
}
