//! Document trait implemented by every stored entity.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use checkin_core::types::IndexKey;

/// A value stored in a [`Collection`](super::Collection).
pub trait Document: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Primary key type.
    type Key: Ord + Clone + Debug + Send + Sync + 'static;

    /// Collection name used in logs.
    const COLLECTION: &'static str;

    /// Primary key of this document.
    fn key(&self) -> Self::Key;

    /// Secondary index entries this document appears under.
    fn index_keys(&self) -> Vec<IndexKey>;
}
