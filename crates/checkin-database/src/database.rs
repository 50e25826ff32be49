//! Database handle: the three collections plus the commit boundary.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use checkin_core::config::store::{StoreBackend, StoreConfig};
use checkin_core::result::AppResult;
use checkin_entity::{Participant, Seat, SignRecord};

use crate::repositories::{ParticipantRepository, SeatRepository, SignRepository};
use crate::store::{Collection, FileBackend, MemoryBackend, SnapshotBackend};

/// Full committed state of the database, as persisted by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Account slots.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Sign records.
    #[serde(default)]
    pub signs: Vec<SignRecord>,
    /// Seats.
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// The check-in document store.
///
/// Writes through any repository are staged; [`Database::commit`] persists
/// all staged writes of all collections as one snapshot, and
/// [`Database::rollback`] discards them. Callers serialize mutating
/// operations (see the writer lock), so at most one operation's writes are
/// staged at a time.
#[derive(Debug)]
pub struct Database {
    participants: Arc<Collection<Participant>>,
    signs: Arc<Collection<SignRecord>>,
    seats: Arc<Collection<Seat>>,
    backend: Arc<dyn SnapshotBackend>,
}

impl Database {
    /// Open the database, loading the backend's last snapshot.
    pub async fn open(backend: Arc<dyn SnapshotBackend>) -> AppResult<Self> {
        let snapshot = backend.load().await?.unwrap_or_default();
        info!(
            participants = snapshot.participants.len(),
            signs = snapshot.signs.len(),
            seats = snapshot.seats.len(),
            "Database opened"
        );
        Ok(Self {
            participants: Arc::new(Collection::from_documents(snapshot.participants)),
            signs: Arc::new(Collection::from_documents(snapshot.signs)),
            seats: Arc::new(Collection::from_documents(snapshot.seats)),
            backend,
        })
    }

    /// Open the database with the backend selected by configuration.
    pub async fn from_config(config: &StoreConfig) -> AppResult<Self> {
        let backend: Arc<dyn SnapshotBackend> = match config.backend {
            StoreBackend::File => Arc::new(FileBackend::new(&config.path)),
            StoreBackend::Memory => Arc::new(MemoryBackend::new()),
        };
        Self::open(backend).await
    }

    /// Open an in-memory database seeded with `snapshot`.
    pub async fn in_memory(snapshot: Snapshot) -> AppResult<Self> {
        Self::open(Arc::new(MemoryBackend::with_snapshot(snapshot))).await
    }

    /// Participant repository.
    pub fn participants(&self) -> ParticipantRepository {
        ParticipantRepository::new(Arc::clone(&self.participants))
    }

    /// Sign record repository.
    pub fn signs(&self) -> SignRepository {
        SignRepository::new(Arc::clone(&self.signs))
    }

    /// Seat repository.
    pub fn seats(&self) -> SeatRepository {
        SeatRepository::new(Arc::clone(&self.seats))
    }

    /// Current view of every collection, including staged writes.
    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            participants: self.participants.all().await,
            signs: self.signs.all().await,
            seats: self.seats.all().await,
        }
    }

    /// Persist all staged writes durably.
    ///
    /// The snapshot is saved before the staged writes are folded in, so a
    /// failed save leaves them staged for [`Database::rollback`].
    pub async fn commit(&self) -> AppResult<()> {
        if !self.is_dirty().await {
            return Ok(());
        }
        let snapshot = self.snapshot().await;
        self.backend.save(&snapshot).await?;
        self.participants.apply_staged().await;
        self.signs.apply_staged().await;
        self.seats.apply_staged().await;
        Ok(())
    }

    /// Discard all staged writes.
    pub async fn rollback(&self) {
        if self.is_dirty().await {
            warn!("Rolling back staged writes");
        }
        self.participants.discard_staged().await;
        self.signs.discard_staged().await;
        self.seats.discard_staged().await;
    }

    /// Commit on success, roll back on failure, and pass `result` through.
    pub async fn finish<T>(&self, result: AppResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => match self.commit().await {
                Ok(()) => Ok(value),
                Err(e) => {
                    self.rollback().await;
                    Err(e)
                }
            },
            Err(e) => {
                self.rollback().await;
                Err(e)
            }
        }
    }

    async fn is_dirty(&self) -> bool {
        self.participants.is_dirty().await
            || self.signs.is_dirty().await
            || self.seats.is_dirty().await
    }
}
