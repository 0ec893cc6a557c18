use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A harvested article as it is sent to the document index.
///
/// `timestamp` is day-granular: every article harvested in one run carries
/// the run's date, which is what the daily digest queries on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub timestamp: NaiveDate,
    #[serde(default)]
    pub content: String,
}

impl Article {
    pub fn new(title: impl Into<String>, link: impl Into<String>, timestamp: NaiveDate) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            timestamp,
            content: String::new(),
        }
    }
}

/// A (title, content) pair read back out of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedArticle {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// One line of the outgoing digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestLine {
    pub title: String,
    pub summary: String,
}

impl std::fmt::Display for DigestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.summary)
    }
}

/// Per-record outcome of a bulk store. A failed record never aborts the
/// batch, so failures are counted rather than returned as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreReport {
    pub stored: usize,
    pub failed: usize,
}

impl StoreReport {
    pub fn total(&self) -> usize {
        self.stored + self.failed
    }
}
