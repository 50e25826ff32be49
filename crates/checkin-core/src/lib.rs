//! # checkin-core
//!
//! Core crate for the exam check-in service. Contains the unified error
//! system, configuration schemas, site and index key types, the traits for
//! external collaborators (identity resolution, notifications), and the
//! check-in domain events.
//!
//! This crate has **no** internal dependencies on other check-in crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
