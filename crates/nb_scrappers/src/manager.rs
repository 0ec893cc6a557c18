use std::sync::Arc;

use chrono::Local;
use nb_core::{Article, ArticleIndex, DigestLine, DigestNotifier, Result, SummaryModel};
use serde::Serialize;
use tracing::{info, warn};

use crate::scrapers::{scraper_factories, Scraper, SourceMetadata};

/// Length bounds handed to the model for the emailed digest.
const DIGEST_MAX_LEN: usize = 50;
const DIGEST_MIN_LEN: usize = 10;

/// Length bounds for the on-demand viewer, which shows fewer, longer
/// summaries.
const VIEWER_MAX_LEN: usize = 80;
const VIEWER_MIN_LEN: usize = 20;

/// How a batch run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The index had no records for today; summarization never started.
    Empty,
    /// The run finished with this many digest lines produced.
    Completed(usize),
}

/// One entry of an on-demand digest, as served by the web viewer.
#[derive(Debug, Clone, Serialize)]
pub struct DigestEntry {
    pub title: String,
    pub link: String,
    pub summary: String,
}

/// Sequences the daily run: harvest every source, store the records, read
/// back today's, summarize them, and hand the digest to the notifier.
///
/// Every stage absorbs its own failures and the run proceeds with whatever
/// data survived. The single shared instance also backs the viewer's
/// on-demand path, so both surfaces scrape and summarize the same way.
pub struct DigestPipeline {
    scrapers: Vec<Box<dyn Scraper>>,
    index: Arc<dyn ArticleIndex>,
    model: Arc<dyn SummaryModel>,
    notifier: Arc<dyn DigestNotifier>,
    subject: String,
    recipient: Option<String>,
}

impl DigestPipeline {
    pub fn new(
        index: Arc<dyn ArticleIndex>,
        model: Arc<dyn SummaryModel>,
        notifier: Arc<dyn DigestNotifier>,
        subject: String,
        recipient: Option<String>,
    ) -> Self {
        Self {
            scrapers: scraper_factories().into_iter().map(|f| f()).collect(),
            index,
            model,
            notifier,
            subject,
            recipient,
        }
    }

    /// Replace the registered scrapers (used by tests and custom setups).
    pub fn with_scrapers(mut self, scrapers: Vec<Box<dyn Scraper>>) -> Self {
        self.scrapers = scrapers;
        self
    }

    pub fn sources(&self) -> Vec<SourceMetadata> {
        self.scrapers.iter().map(|s| s.source_metadata()).collect()
    }

    /// Run the full batch pipeline once.
    pub async fn run(&self) -> Result<RunOutcome> {
        let run_date = Local::now().date_naive();
        info!(date = %run_date, "📰 starting digest run");

        let harvest = self.harvest(run_date).await;
        info!(count = harvest.len(), "🦗 harvest complete");

        match self.index.store_articles(&harvest).await {
            Ok(report) => {
                info!(stored = report.stored, failed = report.failed, "🏦 stored harvest")
            }
            Err(e) => warn!(error = %e, "document index unreachable while storing"),
        }

        let todays = match self.index.query_by_date(run_date).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "query failed, treating as no data");
                Vec::new()
            }
        };
        if todays.is_empty() {
            info!("no records found for today, nothing to summarize");
            return Ok(RunOutcome::Empty);
        }
        info!(count = todays.len(), "🔎 records found for today");

        let mut lines = Vec::new();
        for hit in &todays {
            if hit.content.is_empty() {
                warn!(title = %hit.title, "skipping article with empty content");
                continue;
            }
            match self
                .model
                .summarize(&hit.content, DIGEST_MAX_LEN, DIGEST_MIN_LEN)
                .await
            {
                Ok(summary) => lines.push(DigestLine {
                    title: hit.title.clone(),
                    summary,
                }),
                Err(e) => warn!(title = %hit.title, error = %e, "summarization failed, skipping"),
            }
        }
        info!(count = lines.len(), "🤖 summaries generated");

        match &self.recipient {
            Some(recipient) => {
                if let Err(e) = self.notifier.notify(&self.subject, &lines, recipient).await {
                    warn!(error = %e, "digest delivery failed");
                } else {
                    info!(recipient = %recipient, "📧 digest sent");
                }
            }
            None => warn!("no digest recipient configured, skipping delivery"),
        }

        Ok(RunOutcome::Completed(lines.len()))
    }

    /// Fetch every source's listing and attach article bodies.
    ///
    /// Per-source failures are logged and contribute nothing; an article
    /// whose body cannot be extracted keeps empty content.
    async fn harvest(&self, run_date: chrono::NaiveDate) -> Vec<Article> {
        let mut harvest = Vec::new();
        for scraper in &self.scrapers {
            let meta = scraper.source_metadata();
            let mut articles = match scraper.fetch_listing(run_date).await {
                Ok(articles) => {
                    info!(source = meta.name, count = articles.len(), "fetched listing");
                    articles
                }
                Err(e) => {
                    warn!(source = meta.name, error = %e, "failed to fetch listing");
                    continue;
                }
            };
            for article in &mut articles {
                match scraper.extract_body(&article.link).await {
                    Ok(body) => article.content = body,
                    Err(e) => {
                        warn!(link = %article.link, error = %e, "failed to extract article body")
                    }
                }
            }
            harvest.extend(articles);
        }
        harvest
    }

    /// On-demand path for the viewer: fetch, extract, and summarize the
    /// first `limit` articles across all sources without touching the index.
    pub async fn fetch_and_summarize(&self, limit: usize) -> Result<Vec<DigestEntry>> {
        let run_date = Local::now().date_naive();
        let harvest = self.harvest(run_date).await;

        let mut entries = Vec::new();
        for article in harvest.into_iter().take(limit) {
            if article.content.is_empty() {
                warn!(title = %article.title, "skipping article with empty content");
                continue;
            }
            match self
                .model
                .summarize(&article.content, VIEWER_MAX_LEN, VIEWER_MIN_LEN)
                .await
            {
                Ok(summary) => entries.push(DigestEntry {
                    title: article.title,
                    link: article.link,
                    summary,
                }),
                Err(e) => warn!(title = %article.title, error = %e, "summarization failed, skipping"),
            }
        }
        Ok(entries)
    }
}
