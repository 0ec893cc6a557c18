use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{Article, IndexedArticle, StoreReport};
use crate::Result;

/// A document index holding one record per harvested article.
///
/// `Err` from either operation means the index was unreachable or refused
/// the request; an empty result set is `Ok` and means "no data".
#[async_trait]
pub trait ArticleIndex: Send + Sync {
    /// Store a batch of articles, continuing past per-record failures
    async fn store_articles(&self, articles: &[Article]) -> Result<StoreReport>;

    /// Fetch every record stored under the given date, in index order
    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<IndexedArticle>>;
}
