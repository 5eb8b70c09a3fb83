//! Live-or-unavailable outcome for optional data sources.
//!
//! The delay feed and the status page are best-effort: a failure must never
//! stop the board from being shown. Rather than swallowing errors, fetches
//! return an [`Availability`] so callers (and tests) can see that a source
//! degraded while still getting usable empty data.

/// Outcome of fetching a best-effort data source.
#[derive(Debug)]
pub enum Availability<T, E> {
    /// The source responded and its data was parsed.
    Live(T),
    /// The source failed; the error says why.
    Unavailable(E),
}

impl<T, E> Availability<T, E> {
    /// Returns true if the source failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Availability::Unavailable(_))
    }

    /// Returns the live data, if any.
    pub fn live(&self) -> Option<&T> {
        match self {
            Availability::Live(data) => Some(data),
            Availability::Unavailable(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Availability::Live(_) => None,
            Availability::Unavailable(err) => Some(err),
        }
    }
}

impl<T: Default, E> Availability<T, E> {
    /// Returns the live data, or the empty default when unavailable.
    pub fn into_data(self) -> T {
        match self {
            Availability::Live(data) => data,
            Availability::Unavailable(_) => T::default(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Availability<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Availability::Live(data),
            Err(err) => Availability::Unavailable(err),
        }
    }
}
