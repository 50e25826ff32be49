//! In-memory document collection with secondary indexes and staged writes.

use std::collections::{BTreeMap, BTreeSet};

use tokio::sync::RwLock;
use tracing::debug;

use checkin_core::types::IndexKey;

use super::document::Document;

/// Mutable state of a collection.
///
/// `staged` overlays `committed`; a staged `None` is a pending delete.
/// `index` always describes the overlaid view, so queries see the
/// writes of the operation in progress.
#[derive(Debug)]
struct CollectionState<D: Document> {
    committed: BTreeMap<D::Key, D>,
    staged: BTreeMap<D::Key, Option<D>>,
    index: BTreeMap<IndexKey, BTreeSet<D::Key>>,
}

impl<D: Document> CollectionState<D> {
    fn new() -> Self {
        Self {
            committed: BTreeMap::new(),
            staged: BTreeMap::new(),
            index: BTreeMap::new(),
        }
    }

    fn current(&self, key: &D::Key) -> Option<&D> {
        match self.staged.get(key) {
            Some(staged) => staged.as_ref(),
            None => self.committed.get(key),
        }
    }

    fn add_to_index(&mut self, doc: &D) {
        let key = doc.key();
        for index_key in doc.index_keys() {
            self.index.entry(index_key).or_default().insert(key.clone());
        }
    }

    fn remove_from_index(&mut self, doc: &D) {
        let key = doc.key();
        for index_key in doc.index_keys() {
            if let Some(keys) = self.index.get_mut(&index_key) {
                keys.remove(&key);
                if keys.is_empty() {
                    self.index.remove(&index_key);
                }
            }
        }
    }

    fn upsert(&mut self, doc: D) {
        let key = doc.key();
        if let Some(old) = self.current(&key).cloned() {
            self.remove_from_index(&old);
        }
        self.add_to_index(&doc);
        self.staged.insert(key, Some(doc));
    }

    fn delete(&mut self, key: &D::Key) -> bool {
        match self.current(key).cloned() {
            Some(old) => {
                self.remove_from_index(&old);
                self.staged.insert(key.clone(), None);
                true
            }
            None => false,
        }
    }

    fn view(&self) -> Vec<D> {
        let mut docs: BTreeMap<&D::Key, &D> = self.committed.iter().collect();
        for (key, staged) in &self.staged {
            match staged {
                Some(doc) => {
                    docs.insert(key, doc);
                }
                None => {
                    docs.remove(key);
                }
            }
        }
        docs.into_values().cloned().collect()
    }

    fn apply_staged(&mut self) -> usize {
        let staged = std::mem::take(&mut self.staged);
        let count = staged.len();
        for (key, doc) in staged {
            match doc {
                Some(doc) => {
                    self.committed.insert(key, doc);
                }
                None => {
                    self.committed.remove(&key);
                }
            }
        }
        count
    }

    fn discard_staged(&mut self) -> usize {
        let staged = std::mem::take(&mut self.staged);
        let count = staged.len();
        for (key, doc) in staged {
            if let Some(doc) = doc {
                self.remove_from_index(&doc);
            }
            if let Some(original) = self.committed.get(&key).cloned() {
                self.add_to_index(&original);
            }
        }
        count
    }
}

/// A set of documents of one kind.
///
/// Writes are staged until [`Collection::apply_staged`] makes them
/// committed, or [`Collection::discard_staged`] drops them. Reads always
/// observe staged writes.
#[derive(Debug)]
pub struct Collection<D: Document> {
    state: RwLock<CollectionState<D>>,
}

impl<D: Document> Collection<D> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CollectionState::new()),
        }
    }

    /// Creates a collection whose committed contents are `docs`.
    pub fn from_documents(docs: impl IntoIterator<Item = D>) -> Self {
        let mut state = CollectionState::new();
        for doc in docs {
            state.add_to_index(&doc);
            state.committed.insert(doc.key(), doc);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Get a document by primary key.
    pub async fn get(&self, key: &D::Key) -> Option<D> {
        self.state.read().await.current(key).cloned()
    }

    /// Insert or replace a document.
    pub async fn upsert(&self, doc: D) {
        self.state.write().await.upsert(doc);
    }

    /// Delete a document. Returns `true` if it existed.
    pub async fn delete(&self, key: &D::Key) -> bool {
        self.state.write().await.delete(key)
    }

    /// All documents under `index_key`, in primary key order.
    pub async fn query(&self, index_key: &IndexKey) -> Vec<D> {
        let state = self.state.read().await;
        state
            .index
            .get(index_key)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key| state.current(key).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of documents under `index_key`.
    pub async fn count_by(&self, index_key: &IndexKey) -> u64 {
        let state = self.state.read().await;
        state.index.get(index_key).map_or(0, |keys| keys.len() as u64)
    }

    /// All documents, in primary key order.
    pub async fn all(&self) -> Vec<D> {
        self.state.read().await.view()
    }

    /// Count all documents.
    pub async fn count(&self) -> u64 {
        self.state.read().await.view().len() as u64
    }

    /// Whether any writes are staged.
    pub async fn is_dirty(&self) -> bool {
        !self.state.read().await.staged.is_empty()
    }

    /// Fold staged writes into the committed contents.
    pub async fn apply_staged(&self) {
        let count = self.state.write().await.apply_staged();
        if count > 0 {
            debug!(collection = D::COLLECTION, count, "Applied staged writes");
        }
    }

    /// Drop staged writes, restoring the committed contents and indexes.
    pub async fn discard_staged(&self) {
        let count = self.state.write().await.discard_staged();
        if count > 0 {
            debug!(collection = D::COLLECTION, count, "Discarded staged writes");
        }
    }
}

impl<D: Document> Default for Collection<D> {
    fn default() -> Self {
        Self::new()
    }
}
