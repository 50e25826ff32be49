//! # checkin-database
//!
//! Embedded document store for the check-in service: one [`Collection`]
//! per entity kind with denormalized secondary indexes, a staged write
//! overlay flushed by [`Database::commit`], and pluggable snapshot
//! backends (JSON file, memory). Typed repositories expose the queries
//! the check-in engine needs.

pub mod database;
pub mod documents;
pub mod repositories;
pub mod store;

pub use database::{Database, Snapshot};
pub use store::{Collection, Document};
