//! Delay feed HTTP client.
//!
//! Queries the public transport open data API for trains currently running
//! on one railway and turns the response into [`DelayObservations`].

use tracing::{info, warn};

use crate::availability::Availability;

use super::error::FeedError;
use super::observations::{DelayObservations, RecordFilter};

/// Default endpoint for running-train information.
pub const DEFAULT_BASE_URL: &str = "https://api.odpt.org/api/v4/odpt:Train";

/// Default railway: JR Chūō Line (Rapid).
pub const DEFAULT_RAILWAY: &str = "odpt.Railway:JR-East.ChuoRapid";

/// Default operator: JR East.
pub const DEFAULT_OPERATOR: &str = "odpt.Operator:JR-East";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the delay feed client.
#[derive(Debug, Clone)]
pub struct DelayFeedConfig {
    /// Consumer key sent as `acl:consumerKey`. May be empty; the request
    /// then fails authorization like any other HTTP error.
    pub access_token: String,
    /// Endpoint URL (defaults to the production API)
    pub base_url: String,
    /// Railway to query and keep
    pub railway: String,
    /// Operator to query
    pub operator: String,
    /// Only keep trains running in this direction, if set
    pub rail_direction: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DelayFeedConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            railway: DEFAULT_RAILWAY.to_string(),
            operator: DEFAULT_OPERATOR.to_string(),
            rail_direction: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the railway to query.
    pub fn with_railway(mut self, railway: impl Into<String>) -> Self {
        self.railway = railway.into();
        self
    }

    /// Set the operator to query.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Only keep trains running in the given direction.
    pub fn with_rail_direction(mut self, direction: impl Into<String>) -> Self {
        self.rail_direction = Some(direction.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The relevance filter implied by this config.
    pub fn record_filter(&self) -> RecordFilter {
        RecordFilter {
            railway: Some(self.railway.clone()),
            rail_direction: self.rail_direction.clone(),
        }
    }
}

/// Delay feed client.
#[derive(Debug, Clone)]
pub struct DelayFeedClient {
    http: reqwest::Client,
    config: DelayFeedConfig,
}

impl DelayFeedClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DelayFeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch delay observations, degrading to [`Availability::Unavailable`]
    /// on any transport, HTTP or parse failure.
    pub async fn fetch(&self) -> Availability<DelayObservations, FeedError> {
        match self.try_fetch().await {
            Ok(observations) => {
                if observations.is_empty() {
                    info!("no trains currently reported on {}", self.config.railway);
                } else {
                    info!(count = observations.len(), "fetched delay observations");
                }
                Availability::Live(observations)
            }
            Err(e) => {
                warn!(error = %e, "delay feed unavailable, showing scheduled times");
                Availability::Unavailable(e)
            }
        }
    }

    /// Fetch delay observations, returning the error on failure.
    pub async fn try_fetch(&self) -> Result<DelayObservations, FeedError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("odpt:railway", self.config.railway.as_str()),
                ("odpt:operator", self.config.operator.as_str()),
                ("acl:consumerKey", self.config.access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        DelayObservations::from_json(&body, &self.config.record_filter())
    }
}
