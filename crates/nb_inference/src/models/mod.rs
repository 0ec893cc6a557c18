use std::sync::Arc;

use nb_core::{Error, Result, SummaryModel};

pub mod hosted;
pub mod naive;

pub use hosted::HostedModel;
pub use naive::NaiveModel;

/// Build a summarization backend by name.
///
/// `hosted` talks to a hosted-inference summarization endpoint; `naive`
/// is the offline leading-sentences fallback.
pub fn create_model(
    kind: &str,
    endpoint: Option<String>,
    api_key: Option<String>,
) -> Result<Arc<dyn SummaryModel>> {
    match kind {
        "hosted" => Ok(Arc::new(HostedModel::new(endpoint, api_key))),
        "naive" => Ok(Arc::new(NaiveModel::new())),
        other => Err(Error::Config(format!("unknown summary model: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_name() {
        assert_eq!(create_model("naive", None, None).unwrap().name(), "naive");
        assert_eq!(create_model("hosted", None, None).unwrap().name(), "hosted");
        assert!(create_model("markov", None, None).is_err());
    }
}
