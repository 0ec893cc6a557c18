use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, ArticleIndex, Error, IndexedArticle, Result, StoreReport};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::QUERY_LIMIT;

#[derive(Debug, Clone)]
pub struct ElasticConfig {
    /// Base URL of the index, e.g. `http://localhost:9200/news_data`.
    pub index_url: String,
}

impl ElasticConfig {
    pub fn from_env() -> Self {
        Self {
            index_url: env::var("INDEX_URL")
                .unwrap_or_else(|_| nb_core::config::DEFAULT_INDEX_URL.to_string()),
        }
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            index_url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// Client for an Elasticsearch-compatible document index.
///
/// Records go in one `POST {index_url}/_doc` at a time; the daily read-back
/// is a single `match` query on the timestamp field.
pub struct ElasticIndex {
    client: reqwest::Client,
    config: ElasticConfig,
}

impl ElasticIndex {
    pub fn new(config: ElasticConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn store_one(&self, article: &Article) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/_doc", self.config.index_url))
            .json(article)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Index(format!("store returned {}: {}", status, body)));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SearchRequest {
    query: SearchQuery,
    size: usize,
}

#[derive(Serialize)]
struct SearchQuery {
    #[serde(rename = "match")]
    match_clause: MatchClause,
}

#[derive(Serialize)]
struct MatchClause {
    timestamp: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Deserialize)]
struct HitsEnvelope {
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: IndexedArticle,
}

#[async_trait]
impl ArticleIndex for ElasticIndex {
    async fn store_articles(&self, articles: &[Article]) -> Result<StoreReport> {
        let mut report = StoreReport::default();
        for article in articles {
            match self.store_one(article).await {
                Ok(()) => {
                    debug!(title = %article.title, "stored record");
                    report.stored += 1;
                }
                Err(e) => {
                    warn!(title = %article.title, error = %e, "failed to store record");
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<IndexedArticle>> {
        let request = SearchRequest {
            query: SearchQuery {
                match_clause: MatchClause {
                    timestamp: date.to_string(),
                },
            },
            size: QUERY_LIMIT,
        };
        let response = self
            .client
            .post(format!("{}/_search", self.config.index_url))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Index(format!("search returned {}: {}", status, body)));
        }
        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.hits.hits.into_iter().map(|h| h.source).collect())
    }
}
