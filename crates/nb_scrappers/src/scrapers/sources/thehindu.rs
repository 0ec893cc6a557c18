use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, Result};

use crate::scrapers::{utils, Scraper, SourceMetadata};

#[derive(Debug, Clone, Default)]
pub struct TheHinduScraper;

impl TheHinduScraper {
    pub fn new() -> Self {
        Self
    }

    const LISTING_URL: &'static str = "https://www.thehindu.com/news/national/";
    const ANCHOR_SELECTOR: &'static str = "h3 a";
}

#[async_trait]
impl Scraper for TheHinduScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "India (The Hindu)",
            emoji: "🇮🇳",
            listing_url: Self::LISTING_URL,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains("thehindu.com")
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["thehindu"]
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
        let scraper = TheHinduScraper::new();
        assert!(scraper.can_handle("https://www.thehindu.com/news/national/article1.ece"));
        assert!(!scraper.can_handle("https://www.dawn.com/world"));
    }

    #[test]
    fn test_listing_rule_matches_headline_anchors() {
        let html = r#"
            <h3><a href="/news/national/budget.ece"> Budget session opens </a></h3>
            <h2><a href="/ignored">Not a headline block</a></h2>
        "#;
        let articles = utils::parse_listing(
            html,
            TheHinduScraper::ANCHOR_SELECTOR,
            TheHinduScraper::LISTING_URL,
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        );
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Budget session opens");
        assert_eq!(
            articles[0].link,
            "https://www.thehindu.com/news/national//news/national/budget.ece"
        );
    }
}
