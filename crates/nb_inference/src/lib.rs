pub mod models;

pub use models::{create_model, HostedModel, NaiveModel};

pub mod prelude {
    pub use super::models::create_model;
    pub use nb_core::{Error, Result, SummaryModel};
}
