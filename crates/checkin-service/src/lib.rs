//! # checkin-service
//!
//! The check-in core. [`WriterLock`] serializes every mutating operation;
//! [`SeatAllocator`] picks seats by priority tier with uniform randomness
//! inside a tier; [`CheckInEngine`] owns the idempotent sign-in and seat
//! update rules; [`TokenStore`] issues and redeems one-time credential
//! tokens. External collaborators (identity service, notification sinks)
//! live in [`identity`] and [`notification`].
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod checkin;
pub mod identity;
pub mod lock;
pub mod notification;
pub mod seat;
pub mod token;

pub use checkin::{CheckInEngine, LookupKey};
pub use lock::{Transaction, WriterGuard, WriterLock};
pub use seat::SeatAllocator;
pub use token::TokenStore;
