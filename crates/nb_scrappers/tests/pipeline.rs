//! Full pipeline run against in-process stand-ins: an HTTP fixture server
//! for the outlet pages and a fake document index speaking the `_doc` /
//! `_search` wire contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use nb_core::{Article, DigestLine, DigestNotifier, Result};
use nb_inference::NaiveModel;
use nb_scrappers::scrapers::{utils, Scraper, SourceMetadata};
use nb_scrappers::{DigestPipeline, RunOutcome};
use nb_storage::{ElasticConfig, ElasticIndex};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn listing() -> Html<&'static str> {
    Html(
        r#"<html><body>
            <h3><a href="/articles/1">Story One</a></h3>
            <h3><a href="/articles/2"> Story Two </a></h3>
        </body></html>"#,
    )
}

async fn article_one() -> Html<&'static str> {
    Html("<html><body><p>Violence   erupted in the capital.</p><p>Officials responded; calm returned.</p></body></html>")
}

async fn article_two() -> Html<&'static str> {
    Html("<html><body><p>Markets rallied — sharply.</p><p>Analysts expect more gains soon.</p></body></html>")
}

/// Fake document index: `_doc` collects records, `_search` serves them
/// back filtered on the requested timestamp.
#[derive(Default)]
struct IndexState {
    docs: Mutex<Vec<serde_json::Value>>,
}

async fn store_doc(
    State(state): State<Arc<IndexState>>,
    Json(doc): Json<serde_json::Value>,
) -> StatusCode {
    state.docs.lock().unwrap().push(doc);
    StatusCode::CREATED
}

async fn search(
    State(state): State<Arc<IndexState>>,
    Json(request): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let wanted = request["query"]["match"]["timestamp"].clone();
    let hits: Vec<serde_json::Value> = state
        .docs
        .lock()
        .unwrap()
        .iter()
        .filter(|doc| doc["timestamp"] == wanted)
        .map(|doc| serde_json::json!({"_source": doc}))
        .collect();
    Json(serde_json::json!({"hits": {"hits": hits}}))
}

#[derive(Debug)]
struct TestOutlet {
    listing_url: &'static str,
}

impl TestOutlet {
    fn new(base: &str) -> Self {
        Self {
            listing_url: Box::leak(format!("{}/listing", base).into_boxed_str()),
        }
    }
}

#[async_trait]
impl Scraper for TestOutlet {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Test Outlet",
            emoji: "🧪",
            listing_url: self.listing_url,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        url.starts_with(self.listing_url)
    }

    async fn fetch_listing(&self, run_date: NaiveDate) -> Result<Vec<Article>> {
        utils::fetch_listing(self.listing_url, "h3 a", run_date).await
    }

    async fn extract_body(&self, url: &str) -> Result<String> {
        utils::fetch_article_body(url).await
    }
}

#[derive(Default)]
struct RecordingNotifier {
    calls: AtomicUsize,
    subject: Mutex<String>,
    lines: Mutex<Vec<DigestLine>>,
}

#[async_trait]
impl DigestNotifier for RecordingNotifier {
    async fn notify(&self, subject: &str, lines: &[DigestLine], _recipient: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.subject.lock().unwrap() = subject.to_string();
        *self.lines.lock().unwrap() = lines.to_vec();
        Ok(())
    }
}

#[tokio::test]
async fn test_full_run_from_listing_to_digest() {
    let outlet_base = spawn(
        Router::new()
            .route("/listing", get(listing))
            // Relative hrefs are absolutized by prefixing the listing URL.
            .route("/listing/articles/1", get(article_one))
            .route("/listing/articles/2", get(article_two)),
    )
    .await;

    let index_state = Arc::new(IndexState::default());
    let index_base = spawn(
        Router::new()
            .route("/news_data/_doc", post(store_doc))
            .route("/news_data/_search", post(search))
            .with_state(index_state.clone()),
    )
    .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = DigestPipeline::new(
        Arc::new(ElasticIndex::new(ElasticConfig::with_url(&format!(
            "{}/news_data",
            index_base
        )))),
        Arc::new(NaiveModel::new()),
        notifier.clone(),
        "Today's News Summaries".to_string(),
        Some("reader@example.com".to_string()),
    )
    .with_scrapers(vec![Box::new(TestOutlet::new(&outlet_base))]);

    let outcome = pipeline.run().await.unwrap();
    assert_eq!(outcome, RunOutcome::Completed(2));

    // Both records were stored, with normalized content and trimmed titles.
    let docs = index_state.docs.lock().unwrap().clone();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["title"], "Story One");
    assert_eq!(docs[1]["title"], "Story Two");
    assert_eq!(
        docs[0]["content"],
        "Violence erupted in the capital. Officials responded calm returned."
    );
    assert_eq!(
        docs[1]["content"],
        "Markets rallied sharply. Analysts expect more gains soon."
    );

    // Exactly one delivery, lines in source order, numbered from one.
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(*notifier.subject.lock().unwrap(), "Today's News Summaries");
    let lines = notifier.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].title, "Story One");
    assert_eq!(lines[1].title, "Story Two");

    let body = nb_notify::format_digest(&lines);
    assert!(body.contains("1. Story One:"));
    assert!(body.contains("\n2. Story Two:"));
}

#[tokio::test]
async fn test_unreachable_outlet_yields_empty_run() {
    let index_state = Arc::new(IndexState::default());
    let index_base = spawn(
        Router::new()
            .route("/news_data/_doc", post(store_doc))
            .route("/news_data/_search", post(search))
            .with_state(index_state.clone()),
    )
    .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = DigestPipeline::new(
        Arc::new(ElasticIndex::new(ElasticConfig::with_url(&format!(
            "{}/news_data",
            index_base
        )))),
        Arc::new(NaiveModel::new()),
        notifier.clone(),
        "Today's News Summaries".to_string(),
        Some("reader@example.com".to_string()),
    )
    .with_scrapers(vec![Box::new(TestOutlet::new("http://127.0.0.1:9"))]);

    let outcome = pipeline.run().await.unwrap();
    assert_eq!(outcome, RunOutcome::Empty);
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
}
