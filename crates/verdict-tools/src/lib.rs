//! Built-in tools exposed to workforce workers.

mod search;

pub use search::{GoogleSearchClient, SearchResult, SearchTool};
