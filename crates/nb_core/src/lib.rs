pub mod config;
pub mod error;
pub mod inference;
pub mod notify;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use inference::SummaryModel;
pub use notify::DigestNotifier;
pub use storage::ArticleIndex;
pub use types::{Article, DigestLine, IndexedArticle, StoreReport};

pub type Result<T> = std::result::Result<T, Error>;
