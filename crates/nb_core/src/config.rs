use std::env;
use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_INDEX_URL: &str = "http://localhost:9200/news_data";
pub const DEFAULT_SUBJECT: &str = "Today's News Summaries";

/// Application configuration resolved from environment variables once at
/// startup. Secrets are never compiled in; SMTP settings stay optional and
/// are only required when a real delivery is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    // Document index
    pub index_url: String,

    // Summarization
    pub summary_model_url: Option<String>,
    pub summary_api_key: Option<String>,

    // SMTP delivery
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub digest_from: Option<String>,
    pub digest_to: Option<String>,
    pub digest_subject: String,

    // Web viewer
    pub web_host: String,
    pub web_port: u16,
    pub heatmap_images: Vec<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            index_url: env::var("INDEX_URL").unwrap_or_else(|_| DEFAULT_INDEX_URL.to_string()),
            summary_model_url: env::var("SUMMARY_MODEL_URL").ok(),
            summary_api_key: env::var("SUMMARY_API_KEY").ok(),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: parse_port("SMTP_PORT", 587)?,
            smtp_username: env::var("SMTP_USERNAME").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            digest_from: env::var("DIGEST_FROM").ok(),
            digest_to: env::var("DIGEST_TO").ok(),
            digest_subject: env::var("DIGEST_SUBJECT")
                .unwrap_or_else(|_| DEFAULT_SUBJECT.to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: parse_port("WEB_PORT", 3000)?,
            heatmap_images: parse_path_list(&env::var("HEATMAP_IMAGES").unwrap_or_default()),
        })
    }
}

fn parse_port(key: &str, default: u16) -> Result<u16> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a port number, got {:?}", key, value))),
        Err(_) => Ok(default),
    }
}

/// Split a colon-separated path list, dropping empty segments.
fn parse_path_list(raw: &str) -> Vec<PathBuf> {
    raw.split(':')
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
