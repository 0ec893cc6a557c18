use async_trait::async_trait;
use nb_core::{Result, SummaryModel};

/// Offline fallback: the leading sentences of the input, clamped to the
/// requested word bounds. Deterministic by construction.
#[derive(Debug, Clone, Default)]
pub struct NaiveModel;

impl NaiveModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SummaryModel for NaiveModel {
    fn name(&self) -> &str {
        "naive"
    }

    async fn summarize(&self, text: &str, max_len: usize, min_len: usize) -> Result<String> {
        let mut summary = String::new();
        let mut words = 0usize;
        for sentence in text.split_inclusive(['.', '!', '?']) {
            let count = sentence.split_whitespace().count();
            if words >= min_len && words + count > max_len {
                break;
            }
            summary.push_str(sentence);
            words += count;
            if words >= max_len {
                break;
            }
        }
        // The first sentence alone may overshoot; clamp on word count.
        let clamped: Vec<&str> = summary.split_whitespace().take(max_len).collect();
        Ok(clamped.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "One two three. Four five six seven. Eight nine. Ten eleven twelve thirteen.";

    #[tokio::test]
    async fn test_respects_max_words() {
        let model = NaiveModel::new();
        let summary = model.summarize(TEXT, 7, 2).await.unwrap();
        assert!(summary.split_whitespace().count() <= 7);
        assert!(summary.starts_with("One two three."));
    }

    #[tokio::test]
    async fn test_keeps_adding_until_min_reached() {
        let model = NaiveModel::new();
        let summary = model.summarize(TEXT, 50, 10).await.unwrap();
        assert!(summary.split_whitespace().count() >= 10);
    }

    #[tokio::test]
    async fn test_clamps_oversized_first_sentence() {
        let model = NaiveModel::new();
        let long = "a b c d e f g h i j k l.";
        let summary = model.summarize(long, 5, 1).await.unwrap();
        assert_eq!(summary, "a b c d e");
    }

    #[tokio::test]
    async fn test_deterministic() {
        let model = NaiveModel::new();
        let a = model.summarize(TEXT, 8, 3).await.unwrap();
        let b = model.summarize(TEXT, 8, 3).await.unwrap();
        assert_eq!(a, b);
    }
}
