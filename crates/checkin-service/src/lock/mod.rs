//! Process-wide single-writer exclusion.

pub mod transaction;
pub mod writer;

pub use transaction::Transaction;
pub use writer::{WriterGuard, WriterLock};
