use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, Result};

use crate::scrapers::{utils, Scraper, SourceMetadata};

#[derive(Debug, Clone, Default)]
pub struct BbcNewsScraper;

impl BbcNewsScraper {
    pub fn new() -> Self {
        Self
    }

    const LISTING_URL: &'static str = "https://www.bbc.com/news/politics";
    const ANCHOR_SELECTOR: &'static str = "h3 a";
}

#[async_trait]
impl Scraper for BbcNewsScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "UK (BBC Politics)",
            emoji: "🇬🇧",
            listing_url: Self::LISTING_URL,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("bbc.com")
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["bbc", "bbcnews"]
    }

    async fn fetch_listing(&self, run_date: NaiveDate) -> Result<Vec<Article>> {
        utils::fetch_listing(Self::LISTING_URL, Self::ANCHOR_SELECTOR, run_date).await
    }

    async fn extract_body(&self, url: &str) -> Result<String> {
        utils::fetch_article_body(url).await
    }
}
