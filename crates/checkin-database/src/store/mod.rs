//! Generic document collection and snapshot backends.

pub mod backend;
pub mod collection;
pub mod document;

pub use backend::{FileBackend, MemoryBackend, SnapshotBackend};
pub use collection::Collection;
pub use document::Document;
