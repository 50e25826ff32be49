//! # checkin-api
//!
//! HTTP API layer for the exam check-in service built on Axum.
//!
//! Provides the administrative endpoints under `/api`, the public
//! one-time credential page, request logging and CORS middleware, query
//! DTOs, and the mapping from [`checkin_core::AppError`] to responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
