pub mod elastic;
pub mod memory;

pub use elastic::{ElasticConfig, ElasticIndex};
pub use memory::MemoryIndex;

/// The digest never reads more than this many records back per day.
pub const QUERY_LIMIT: usize = 10;
