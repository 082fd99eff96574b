//! Object storage for staged and classified listing files.
//!
//! The pipeline addresses objects by bucket and key, S3-style. Backends:
//!
//! - [`MemoryStore`]: in-process map, for tests and dry runs
//! - [`FsStore`]: one directory per bucket under a local root

mod error;
mod filesystem;
mod memory;
mod store;

pub use error::{Result, StorageError};
pub use filesystem::FsStore;
pub use memory::MemoryStore;
pub use store::ObjectStore;
