use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, Error, Result};

pub mod sources;

use sources::bbcnews::BbcNewsScraper;
use sources::dailystar::DailyStarScraper;
use sources::dawn::DawnScraper;
use sources::thehindu::TheHinduScraper;
use sources::whitehouse::WhiteHouseScraper;

/// Listing pages never contribute more than this many articles per run.
pub const LISTING_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    pub listing_url: &'static str,
}

#[async_trait]
pub trait Scraper: Send + Sync + std::fmt::Debug {
    /// Returns the name and listing page of the news source
    fn source_metadata(&self) -> SourceMetadata;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Fetch the listing page and return up to [`LISTING_LIMIT`] article
    /// stubs, each stamped with the supplied run date
    async fn fetch_listing(&self, run_date: NaiveDate) -> Result<Vec<Article>>;

    /// Fetch an article page and return its cleaned body text
    async fn extract_body(&self, url: &str) -> Result<String>;

    /// Returns a list of CLI shorthand names for this scraper
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }
}

pub type ScraperFactory = fn() -> Box<dyn Scraper>;

pub fn scraper_factories() -> Vec<ScraperFactory> {
    vec![
        || Box::new(TheHinduScraper::new()),
        || Box::new(WhiteHouseScraper::new()),
        || Box::new(BbcNewsScraper::new()),
        || Box::new(DawnScraper::new()),
        || Box::new(DailyStarScraper::new()),
    ]
}

/// Dispatch a URL to the scraper that recognizes its host.
///
/// A URL nobody claims is an explicit [`Error::UnsupportedSource`], so
/// callers can tell "source not recognized" apart from "no articles".
pub fn scraper_for_url(url: &str) -> Result<Box<dyn Scraper>> {
    scraper_factories()
        .into_iter()
        .map(|factory| factory())
        .find(|scraper| scraper.can_handle(url))
        .ok_or_else(|| Error::UnsupportedSource(url.to_string()))
}

/// Shared fetch and parse helpers used by every source module.
pub mod utils {
    use super::*;
    use crate::text::normalize;
    use scraper::{Html, Selector};
    use tracing::debug;

    const USER_AGENT: &str = "Mozilla/5.0";

    /// GET the listing page and parse it into article stubs.
    pub async fn fetch_listing(
        listing_url: &str,
        anchor_selector: &str,
        run_date: NaiveDate,
    ) -> Result<Vec<Article>> {
        let html = get_page(listing_url).await?;
        Ok(parse_listing(&html, anchor_selector, listing_url, run_date))
    }

    /// GET an article page and return its cleaned paragraph text.
    pub async fn fetch_article_body(url: &str) -> Result<String> {
        let html = get_page(url).await?;
        Ok(paragraph_text(&html))
    }

    async fn get_page(url: &str) -> Result<String> {
        let response = reqwest::Client::new()
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Pull up to [`LISTING_LIMIT`] article stubs out of a listing page.
    ///
    /// Anchors are taken in document order. Titles are the trimmed visible
    /// text; relative hrefs are absolutized by prefixing the listing URL.
    /// Anchors without an href are skipped.
    pub fn parse_listing(
        html: &str,
        anchor_selector: &str,
        listing_url: &str,
        run_date: NaiveDate,
    ) -> Vec<Article> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(anchor_selector).unwrap();

        let mut articles = Vec::new();
        for anchor in document.select(&selector) {
            if articles.len() == LISTING_LIMIT {
                break;
            }
            let Some(href) = anchor.value().attr("href") else {
                debug!(listing_url, "skipping anchor without href");
                continue;
            };
            let title = anchor.text().collect::<String>().trim().to_string();
            let link = if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{}{}", listing_url, href)
            };
            articles.push(Article::new(title, link, run_date));
        }
        articles
    }

    /// Join the text of every paragraph element in document order and
    /// normalize the result.
    pub fn paragraph_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let selector = Selector::parse("p").unwrap();
        let joined = document
            .select(&selector)
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");
        normalize(&joined)
    }
}
