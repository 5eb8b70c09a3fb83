//! Status page HTTP client.

use tracing::{info, warn};

use crate::availability::Availability;

use super::error::StatusPageError;
use super::parse::{SectionQuery, StatusReport, parse_status_page};

/// Default status page: JR East train information for the Kantō area.
pub const DEFAULT_STATUS_URL: &str = "https://traininfo.jreast.co.jp/train_info/kanto.aspx";

/// Configuration for the status page client.
#[derive(Debug, Clone)]
pub struct StatusPageConfig {
    /// Page URL
    pub url: String,
    /// Sections to extract
    pub sections: Vec<SectionQuery>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StatusPageConfig {
    /// Create a config for the given page with the default sections.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sections: default_sections(),
            timeout_secs: crate::realtime::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Replace the sections to extract.
    pub fn with_sections(mut self, sections: Vec<SectionQuery>) -> Self {
        self.sections = sections;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StatusPageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_URL)
    }
}

/// The line-status list and the notice list.
fn default_sections() -> Vec<SectionQuery> {
    vec![
        SectionQuery::new("運行状況", "#line-status dl"),
        SectionQuery::new("お知らせ", "#notices dl"),
    ]
}

/// Client for the third-party status page.
#[derive(Debug, Clone)]
pub struct StatusPageClient {
    http: reqwest::Client,
    config: StatusPageConfig,
}

impl StatusPageClient {
    /// Create a new status page client.
    pub fn new(config: StatusPageConfig) -> Result<Self, StatusPageError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("next-trains/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch and parse the page, degrading to [`Availability::Unavailable`]
    /// on failure.
    pub async fn fetch(&self) -> Availability<StatusReport, StatusPageError> {
        match self.try_fetch().await {
            Ok(report) => {
                let lines: usize = report.sections.iter().map(|s| s.lines.len()).sum();
                info!(lines, "fetched status page");
                Availability::Live(report)
            }
            Err(e) => {
                warn!(error = %e, "status page unavailable");
                Availability::Unavailable(e)
            }
        }
    }

    /// Fetch and parse the page, returning the error on failure.
    pub async fn try_fetch(&self) -> Result<StatusReport, StatusPageError> {
        let response = self.http.get(&self.config.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatusPageError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        parse_status_page(&body, &self.config.sections)
    }
}
