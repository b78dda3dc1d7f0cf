//! Promotion resource URLs.

use urlencoding::encode;

/// URL patterns of the promotions resource relative to a base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoints {
    base: String,
}

impl Endpoints {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `/promotions`
    pub(crate) fn collection(&self) -> String {
        format!("{}/promotions", self.base)
    }

    /// `/promotions/{id}`, with `id` passed through as a single path segment.
    pub(crate) fn member(&self, id: &str) -> String {
        format!("{}/promotions/{}", self.base, encode(id))
    }

    /// `/promotions?{query}`, or the bare collection for an empty query.
    pub(crate) fn search(&self, query: &str) -> String {
        if query.is_empty() {
            self.collection()
        } else {
            format!("{}/promotions?{query}", self.base)
        }
    }

    /// `/health`
    pub(crate) fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}
