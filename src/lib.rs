pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod render;
pub mod resolve;
pub mod search;
pub mod server;
pub mod stem;
pub mod store;
pub mod tools;
pub mod tracing;

pub use error::{DocsError, Result};
pub use index::{DocEntry, DocSet, FileIndex, IndexSnapshot};
pub use resolve::{DocResolver, ReadResult};
pub use search::{SearchEngine, SearchResult};
pub use store::DocStore;
