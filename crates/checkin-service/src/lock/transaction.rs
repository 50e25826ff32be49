//! Writer transactions: the writer lock bound to one database commit.

use std::sync::Arc;

use tracing::warn;

use checkin_core::error::AppError;
use checkin_core::result::AppResult;
use checkin_database::Database;

use super::writer::{WriterGuard, WriterLock};

impl WriterLock {
    /// Enter the critical section and open a transaction on `db`.
    ///
    /// Writes staged by an earlier holder that never finished are
    /// discarded first.
    pub async fn begin(
        &self,
        db: &Arc<Database>,
        operation: &'static str,
    ) -> AppResult<Transaction> {
        let guard = self.acquire(operation).await?;
        db.rollback().await;
        Ok(Transaction {
            db: Arc::clone(db),
            guard: Some(guard),
        })
    }
}

/// An open transaction holding the writer lock.
///
/// [`Transaction::finish`] commits or rolls back. A transaction dropped
/// without finishing, for example because the caller's future was
/// cancelled, rolls back its staged writes before the lock is released.
#[derive(Debug)]
pub struct Transaction {
    db: Arc<Database>,
    guard: Option<WriterGuard>,
}

impl Transaction {
    /// Commit on success, roll back on failure, then release the lock.
    ///
    /// The commit runs on its own task and keeps the lock until it
    /// completes, so cancelling the caller cannot interrupt it halfway.
    pub async fn finish<T>(mut self, result: AppResult<T>) -> AppResult<T>
    where
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let guard = self.guard.take();
        tokio::spawn(async move {
            let outcome = db.finish(result).await;
            drop(guard);
            outcome
        })
        .await
        .map_err(|e| AppError::internal(format!("commit task failed: {e}")))?
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        let Some(guard) = self.guard.take() else {
            return;
        };
        warn!("Transaction dropped before finishing, rolling back");
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let db = Arc::clone(&self.db);
                handle.spawn(async move {
                    db.rollback().await;
                    drop(guard);
                });
            }
            // The next `begin` discards the leftovers.
            Err(_) => drop(guard),
        }
    }
}
