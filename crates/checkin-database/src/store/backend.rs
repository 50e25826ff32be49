//! Snapshot persistence backends.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use checkin_core::error::{AppError, ErrorKind};
use checkin_core::result::AppResult;

use crate::database::Snapshot;

/// Durable home of the committed database state.
///
/// `save` must replace the previous snapshot atomically: after a crash,
/// `load` returns either the old or the new snapshot, never a mix.
#[async_trait]
pub trait SnapshotBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Load the last saved snapshot, `None` if nothing was ever saved.
    async fn load(&self) -> AppResult<Option<Snapshot>>;

    /// Persist `snapshot` as the new committed state.
    async fn save(&self, snapshot: &Snapshot) -> AppResult<()>;
}

/// Keeps the last snapshot in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    last: Mutex<Option<Snapshot>>,
}

impl MemoryBackend {
    /// Creates an empty memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a memory backend that starts from `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            last: Mutex::new(Some(snapshot)),
        }
    }
}

#[async_trait]
impl SnapshotBackend for MemoryBackend {
    async fn load(&self) -> AppResult<Option<Snapshot>> {
        Ok(self.last.lock().await.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        *self.last.lock().await = Some(snapshot.clone());
        Ok(())
    }
}

/// Stores the snapshot as a JSON file, replaced via write-then-rename.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a file backend persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotBackend for FileBackend {
    async fn load(&self) -> AppResult<Option<Snapshot>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot file, starting empty");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read snapshot {}", self.path.display()),
                    e,
                ));
            }
        };
        let snapshot = serde_json::from_slice(&bytes)?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec(snapshot)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "Snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::types::Site;
    use checkin_entity::{Participant, Seat};

    fn snapshot() -> Snapshot {
        Snapshot {
            participants: vec![Participant::blank(1, "oj001", "pw1")],
            signs: Vec::new(),
            seats: vec![Seat::new(1, Site::One, 1, 0)],
        }
    }

    #[tokio::test]
    async fn test_file_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("data.json"));
        assert!(backend.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_backend_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested").join("data.json"));
        backend.save(&snapshot()).await.unwrap();

        let loaded = backend.load().await.unwrap().unwrap();
        assert_eq!(loaded, snapshot());
        assert!(!backend.temp_path().exists());
    }

    #[tokio::test]
    async fn test_file_backend_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"{not json").unwrap();
        let err = FileBackend::new(path).load().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
