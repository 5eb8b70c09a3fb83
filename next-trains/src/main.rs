use chrono::Local;
use tracing_subscriber::EnvFilter;

use next_trains::availability::Availability;
use next_trains::config::AppConfig;
use next_trains::display;
use next_trains::domain::RailTime;
use next_trains::projection::{rank_departures, shuttle_board};
use next_trains::realtime::DelayFeedClient;
use next_trains::status::StatusPageClient;
use next_trains::timetable::{ShuttleTimetable, Timetable, TimetableError};

/// Station the built-in timetable belongs to.
const STATION: &str = "八王子 (上り)";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("next_trains=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let (timetable, shuttle) = match load_timetables(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load timetable: {e}");
            std::process::exit(1);
        }
    };

    let now = RailTime::from_datetime(Local::now().naive_local());
    print!("{}", display::render_header(now, STATION));

    // Both live sources degrade the same way when the client can't even be built.
    let delays = match DelayFeedClient::new(config.delay_feed.clone()) {
        Ok(client) => client.fetch().await,
        Err(e) => Availability::Unavailable(e),
    };
    let observations = delays.into_data();

    let departures = rank_departures(
        timetable.entries(),
        &observations,
        now,
        &config.projection,
    );
    print!("{}", display::render_departures(&departures));
    println!();

    let board = shuttle_board(&shuttle, now.time(), config.projection.limit);
    print!("{}", display::render_shuttle(&shuttle, &board));
    println!();

    let status = match StatusPageClient::new(config.status_page.clone()) {
        Ok(client) => client.fetch().await,
        Err(e) => Availability::Unavailable(e),
    };
    print!("{}", display::render_status(&status.into_data()));
}

fn load_timetables(config: &AppConfig) -> Result<(Timetable, ShuttleTimetable), TimetableError> {
    let timetable = match &config.timetable_path {
        Some(path) => Timetable::from_path(path)?,
        None => Timetable::builtin()?,
    };
    let shuttle = match &config.shuttle_path {
        Some(path) => ShuttleTimetable::from_path(path)?,
        None => ShuttleTimetable::builtin()?,
    };
    Ok((timetable, shuttle))
}
