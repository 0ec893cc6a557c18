use std::sync::Arc;

use nb_core::{ArticleIndex, Error, Result};

pub mod backends;

pub use backends::*;

/// Build an index backend by name.
///
/// `url` overrides the backend's configured endpoint; `memory` ignores it.
pub fn create_index(kind: &str, url: Option<&str>) -> Result<Arc<dyn ArticleIndex>> {
    match kind {
        "elastic" => {
            let config = match url {
                Some(url) => ElasticConfig::with_url(url),
                None => ElasticConfig::from_env(),
            };
            Ok(Arc::new(ElasticIndex::new(config)))
        }
        "memory" => Ok(Arc::new(MemoryIndex::new())),
        other => Err(Error::Config(format!("unknown index backend: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_index_rejects_unknown_backend() {
        assert!(matches!(
            create_index("sqlite", None),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_create_index_builds_known_backends() {
        assert!(create_index("memory", None).is_ok());
        assert!(create_index("elastic", Some("http://localhost:9200/news_data")).is_ok());
    }
}
