//! Third-party service status page.
//!
//! Scrapes term/description lists ("line → status", "date → notice") from
//! an HTML page and passes their text through unchanged. Nothing here is
//! validated beyond the elements existing: a redesigned page just yields
//! empty sections.

mod client;
mod error;
mod parse;

pub use client::{DEFAULT_STATUS_URL, StatusPageClient, StatusPageConfig};
pub use error::StatusPageError;
pub use parse::{SectionQuery, StatusLine, StatusReport, StatusSection, parse_status_page};
