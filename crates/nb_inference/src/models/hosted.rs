use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nb_core::{Error, Result, SummaryModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/t5-small";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummarizationResponse {
    summary_text: String,
}

/// Client for a hosted pretrained seq2seq summarization model.
///
/// Decoding is deterministic (`do_sample: false`); the caller supplies the
/// length bounds. How the model treats input shorter than the bounds is the
/// model's business.
pub struct HostedModel {
    client: Arc<Client>,
    endpoint: String,
    api_key: Option<String>,
}

impl HostedModel {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
        }
    }
}

impl fmt::Debug for HostedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedModel")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl SummaryModel for HostedModel {
    fn name(&self) -> &str {
        "hosted"
    }

    async fn summarize(&self, text: &str, max_len: usize, min_len: usize) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: max_len,
                min_length: min_len,
                do_sample: false,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let summaries = builder
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SummarizationResponse>>()
            .await?;

        summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or_else(|| Error::Inference("model returned no summary".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/models/t5-small", addr)
    }

    #[tokio::test]
    async fn test_summarize_sends_bounds_and_reads_summary() {
        let app = Router::new().route(
            "/models/t5-small",
            post(|Json(request): Json<serde_json::Value>| async move {
                assert_eq!(request["inputs"], "A long article body.");
                assert_eq!(request["parameters"]["max_length"], 50);
                assert_eq!(request["parameters"]["min_length"], 10);
                assert_eq!(request["parameters"]["do_sample"], false);
                Json(serde_json::json!([{"summary_text": "A short digest."}]))
            }),
        );
        let endpoint = spawn(app).await;

        let model = HostedModel::new(Some(endpoint), None);
        let summary = model.summarize("A long article body.", 50, 10).await.unwrap();
        assert_eq!(summary, "A short digest.");
    }

    #[tokio::test]
    async fn test_empty_response_is_an_inference_error() {
        let app = Router::new().route(
            "/models/t5-small",
            post(|| async { Json(serde_json::json!([])) }),
        );
        let endpoint = spawn(app).await;

        let model = HostedModel::new(Some(endpoint), None);
        let err = model.summarize("Text.", 50, 10).await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let model = HostedModel::new(None, Some("secret-token".to_string()));
        let rendered = format!("{:?}", model);
        assert!(!rendered.contains("secret-token"));
    }
}
