//! Extraction of term/description lists from the status page.

use scraper::{ElementRef, Html, Selector};

use super::error::StatusPageError;

/// Where on the page to find one section of status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionQuery {
    /// Heading shown above the section.
    pub title: String,
    /// CSS selector matching the `<dl>` elements of this section.
    pub selector: String,
}

impl SectionQuery {
    pub fn new(title: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selector: selector.into(),
        }
    }
}

/// One term/description pair, text as it appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub term: String,
    pub description: String,
}

/// The lines found for one [`SectionQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSection {
    pub title: String,
    pub lines: Vec<StatusLine>,
}

/// Everything scraped from the status page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub sections: Vec<StatusSection>,
}

impl StatusReport {
    /// Returns true if no section has any lines.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.lines.is_empty())
    }
}

/// Parse the status page.
///
/// Each section collects the `dt`/`dd` pairs of every element matching its
/// selector. A selector that matches nothing gives an empty section, not
/// an error; only a selector that fails to parse is an error.
pub fn parse_status_page(
    html: &str,
    sections: &[SectionQuery],
) -> Result<StatusReport, StatusPageError> {
    let document = Html::parse_document(html);
    let dt = selector("dt")?;
    let dd = selector("dd")?;

    let mut report = StatusReport::default();

    for query in sections {
        let list = selector(&query.selector)?;
        let lines = document
            .select(&list)
            .flat_map(|element| {
                element
                    .select(&dt)
                    .zip(element.select(&dd))
                    .map(|(term, description)| StatusLine {
                        term: text_of(term),
                        description: text_of(description),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        report.sections.push(StatusSection {
            title: query.title.clone(),
            lines,
        });
    }

    Ok(report)
}

fn selector(css: &str) -> Result<Selector, StatusPageError> {
    Selector::parse(css).map_err(|e| StatusPageError::Selector(format!("{css}: {e:?}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
