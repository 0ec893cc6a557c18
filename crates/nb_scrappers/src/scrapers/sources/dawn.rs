use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, Result};

use crate::scrapers::{utils, Scraper, SourceMetadata};

#[derive(Debug, Clone, Default)]
pub struct DawnScraper;

impl DawnScraper {
    pub fn new() -> Self {
        Self
    }

    const LISTING_URL: &'static str = "https://www.dawn.com/world";
    const ANCHOR_SELECTOR: &'static str = "article h2 a";
}

#[async_trait]
impl Scraper for DawnScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Pakistan (Dawn)",
            emoji: "🇵🇰",
            listing_url: Self::LISTING_URL,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("dawn.com")
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["dawn"]
    }

    async fn fetch_listing(&self, run_date: NaiveDate) -> Result<Vec<Article>> {
        utils::fetch_listing(Self::LISTING_URL, Self::ANCHOR_SELECTOR, run_date).await
    }

    async fn extract_body(&self, url: &str) -> Result<String> {
        utils::fetch_article_body(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_handle() {
        let scraper = DawnScraper::new();
        assert!(scraper.can_handle("https://www.dawn.com/world/1895544"));
        assert!(!scraper.can_handle("https://www.whitehouse.gov/briefing-room/"));
    }

    #[test]
    fn test_listing_rule_requires_article_wrapper() {
        let html = r#"
            <article><h2><a href="https://www.dawn.com/world/1">Summit ends</a></h2></article>
            <h2><a href="https://www.dawn.com/world/2">Navigation heading</a></h2>
        "#;
        let articles = utils::parse_listing(
            html,
            DawnScraper::ANCHOR_SELECTOR,
            DawnScraper::LISTING_URL,
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        );
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Summit ends");
    }
}
