//! Runtime configuration from the process environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::projection::ProjectionConfig;
use crate::realtime::{DEFAULT_TIMEOUT_SECS, DelayFeedConfig};
use crate::status::StatusPageConfig;

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binary needs to run once.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub delay_feed: DelayFeedConfig,
    pub status_page: StatusPageConfig,
    pub projection: ProjectionConfig,
    /// Overrides the built-in train timetable.
    pub timetable_path: Option<PathBuf>,
    /// Overrides the built-in shuttle timetable.
    pub shuttle_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the environment, after loading `.env` if
    /// there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. A missing `ACCESS_TOKEN` is not an
    /// error: the delay feed request then fails authorization and degrades.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = parse_or(&get, "REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let mut delay_feed =
            DelayFeedConfig::new(get("ACCESS_TOKEN").unwrap_or_default()).with_timeout(timeout);
        if let Some(url) = get("DELAY_FEED_URL") {
            delay_feed = delay_feed.with_base_url(url);
        }
        if let Some(railway) = get("DELAY_FEED_RAILWAY") {
            delay_feed = delay_feed.with_railway(railway);
        }
        if let Some(operator) = get("DELAY_FEED_OPERATOR") {
            delay_feed = delay_feed.with_operator(operator);
        }
        if let Some(direction) = get("DELAY_FEED_DIRECTION") {
            delay_feed = delay_feed.with_rail_direction(direction);
        }

        let status_page = match get("STATUS_PAGE_URL") {
            Some(url) => StatusPageConfig::new(url),
            None => StatusPageConfig::default(),
        }
        .with_timeout(timeout);

        let projection = ProjectionConfig::default().with_limit(parse_or(
            &get,
            "DEPARTURE_LIMIT",
            crate::projection::DEFAULT_LIMIT,
        )?);

        Ok(Self {
            delay_feed,
            status_page,
            projection,
            timetable_path: get("TIMETABLE_PATH").map(PathBuf::from),
            shuttle_path: get("SHUTTLE_TIMETABLE_PATH").map(PathBuf::from),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::realtime::{DEFAULT_BASE_URL, DEFAULT_RAILWAY};
    use crate::status::DEFAULT_STATUS_URL;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.delay_feed.access_token, "");
        assert_eq!(config.delay_feed.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.delay_feed.railway, DEFAULT_RAILWAY);
        assert_eq!(config.delay_feed.rail_direction, None);
        assert_eq!(config.delay_feed.timeout_secs, 15);
        assert_eq!(config.status_page.url, DEFAULT_STATUS_URL);
        assert_eq!(config.status_page.timeout_secs, 15);
        assert_eq!(config.projection, ProjectionConfig::default());
        assert!(config.timetable_path.is_none());
        assert!(config.shuttle_path.is_none());
    }

    #[test]
    fn values_are_applied() {
        let config = config_from(&[
            ("ACCESS_TOKEN", "secret"),
            ("DELAY_FEED_URL", "http://localhost:9000/train"),
            ("DELAY_FEED_RAILWAY", "odpt.Railway:JR-East.Ome"),
            ("DELAY_FEED_OPERATOR", "odpt.Operator:Other"),
            ("DELAY_FEED_DIRECTION", "odpt.RailDirection:Inbound"),
            ("STATUS_PAGE_URL", "http://localhost:9000/status"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("DEPARTURE_LIMIT", " 7 "),
            ("TIMETABLE_PATH", "/tmp/trains.json"),
            ("SHUTTLE_TIMETABLE_PATH", "/tmp/shuttle.json"),
        ])
        .unwrap();

        assert_eq!(config.delay_feed.access_token, "secret");
        assert_eq!(config.delay_feed.base_url, "http://localhost:9000/train");
        assert_eq!(config.delay_feed.railway, "odpt.Railway:JR-East.Ome");
        assert_eq!(config.delay_feed.operator, "odpt.Operator:Other");
        assert_eq!(
            config.delay_feed.rail_direction.as_deref(),
            Some("odpt.RailDirection:Inbound")
        );
        assert_eq!(config.delay_feed.timeout_secs, 5);
        assert_eq!(config.status_page.url, "http://localhost:9000/status");
        assert_eq!(config.status_page.timeout_secs, 5);
        assert_eq!(config.projection.limit, 7);
        assert_eq!(config.timetable_path, Some(PathBuf::from("/tmp/trains.json")));
        assert_eq!(config.shuttle_path, Some(PathBuf::from("/tmp/shuttle.json")));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config_from(&[("DELAY_FEED_URL", "  "), ("TIMETABLE_PATH", "")]).unwrap();
        assert_eq!(config.delay_feed.base_url, DEFAULT_BASE_URL);
        assert!(config.timetable_path.is_none());
    }

    #[test]
    fn invalid_number_is_error() {
        let err = config_from(&[("DEPARTURE_LIMIT", "three")]).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = &err;
        assert_eq!(*key, "DEPARTURE_LIMIT");
        assert_eq!(value, "three");
        assert!(err.to_string().starts_with("invalid value for DEPARTURE_LIMIT"));
    }

    #[test]
    fn zero_timeout_is_error() {
        let err = config_from(&[("REQUEST_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECS",
                ..
            }
        ));
    }
}
