use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, Result};

use crate::scrapers::{utils, Scraper, SourceMetadata};

#[derive(Debug, Clone, Default)]
pub struct DailyStarScraper;

impl DailyStarScraper {
    pub fn new() -> Self {
        Self
    }

    const LISTING_URL: &'static str = "https://www.thedailystar.net/news";
    const ANCHOR_SELECTOR: &'static str = "h3.title a";
}

#[async_trait]
impl Scraper for DailyStarScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Bangladesh (Daily Star)",
            emoji: "🇧🇩",
            listing_url: Self::LISTING_URL,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("thedailystar.net")
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["dailystar"]
    }

    async fn fetch_listing(&self, run_date: NaiveDate) -> Result<Vec<Article>> {
        utils::fetch_listing(Self::LISTING_URL, Self::ANCHOR_SELECTOR, run_date).await
    }

    async fn extract_body(&self, url: &str) -> Result<String> {
        utils::fetch_article_body(url).await
    }
}
