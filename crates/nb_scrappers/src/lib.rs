pub mod manager;
pub mod scrapers;
pub mod text;

pub use manager::{DigestEntry, DigestPipeline, RunOutcome};
pub use scrapers::{Scraper, SourceMetadata};

pub mod prelude {
    pub use super::manager::DigestPipeline;
    pub use super::scrapers::Scraper;
    pub use nb_core::{Article, Error, Result};
}
