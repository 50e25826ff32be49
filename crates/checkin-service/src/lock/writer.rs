//! Writer lock: a FIFO semaphore of size one with scoped guards.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{info, warn};

use checkin_core::config::lock::LockConfig;
use checkin_core::error::AppError;
use checkin_core::result::AppResult;

/// Serializes all mutating operations.
///
/// Waiters are admitted in arrival order. The critical section lasts as
/// long as the returned [`WriterGuard`] lives, so it ends on every exit
/// path of the guarded operation, including `?` returns and panics.
#[derive(Debug, Clone)]
pub struct WriterLock {
    semaphore: Arc<Semaphore>,
    slow_threshold: Duration,
    acquire_timeout: Option<Duration>,
}

impl WriterLock {
    /// Creates an idle writer lock.
    pub fn new(config: &LockConfig) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            slow_threshold: Duration::from_millis(config.slow_threshold_ms),
            acquire_timeout: config.acquire_timeout_ms.map(Duration::from_millis),
        }
    }

    /// Suspend until no other holder is active, then enter the critical section.
    ///
    /// Fails with `ServiceUnavailable` when a configured acquire timeout
    /// elapses first.
    pub async fn acquire(&self, operation: &'static str) -> AppResult<WriterGuard> {
        let started = Instant::now();
        let acquire = Arc::clone(&self.semaphore).acquire_owned();

        let permit = match self.acquire_timeout {
            Some(limit) => tokio::time::timeout(limit, acquire).await.map_err(|_| {
                warn!(
                    operation,
                    timeout_ms = limit.as_millis() as u64,
                    "Timed out waiting for writer lock"
                );
                AppError::service_unavailable("timed out waiting for writer lock")
            })?,
            None => acquire.await,
        }
        .map_err(|_| AppError::internal("writer lock closed"))?;

        let waited = started.elapsed();
        if waited > self.slow_threshold {
            info!(
                operation,
                wait_ms = waited.as_millis() as u64,
                "Slow writer lock acquisition"
            );
        }

        Ok(WriterGuard {
            _permit: permit,
            operation,
            acquired_at: Instant::now(),
            slow_threshold: self.slow_threshold,
        })
    }

    /// Whether a critical section is currently active.
    pub fn is_held(&self) -> bool {
        self.semaphore.available_permits() == 0
    }
}

impl Default for WriterLock {
    fn default() -> Self {
        Self::new(&LockConfig::default())
    }
}

/// An active critical section. Dropping it releases the lock to the next
/// waiter.
#[derive(Debug)]
pub struct WriterGuard {
    _permit: OwnedSemaphorePermit,
    operation: &'static str,
    acquired_at: Instant,
    slow_threshold: Duration,
}

impl WriterGuard {
    /// Time spent inside the critical section so far.
    pub fn held_for(&self) -> Duration {
        self.acquired_at.elapsed()
    }
}

impl Drop for WriterGuard {
    fn drop(&mut self) {
        let held = self.held_for();
        if held > self.slow_threshold {
            info!(
                operation = self.operation,
                held_ms = held.as_millis() as u64,
                "Slow writer lock hold"
            );
        }
    }
}
