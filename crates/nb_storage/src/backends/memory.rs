use async_trait::async_trait;
use chrono::NaiveDate;
use nb_core::{Article, ArticleIndex, IndexedArticle, Result, StoreReport};
use tokio::sync::RwLock;

use super::QUERY_LIMIT;

/// In-process index for tests and offline runs. Keeps every stored record
/// in insertion order, duplicates included, exactly like the real index.
#[derive(Default)]
pub struct MemoryIndex {
    articles: RwLock<Vec<Article>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }

    pub async fn records(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }
}

#[async_trait]
impl ArticleIndex for MemoryIndex {
    async fn store_articles(&self, articles: &[Article]) -> Result<StoreReport> {
        let mut store = self.articles.write().await;
        store.extend_from_slice(articles);
        Ok(StoreReport {
            stored: articles.len(),
            failed: 0,
        })
    }

    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<IndexedArticle>> {
        let store = self.articles.read().await;
        Ok(store
            .iter()
            .filter(|a| a.timestamp == date)
            .take(QUERY_LIMIT)
            .map(|a| IndexedArticle {
                title: a.title.clone(),
                content: a.content.clone(),
            })
            .collect())
    }
}
