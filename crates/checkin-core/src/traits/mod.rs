//! Traits for the external collaborators the check-in engine consumes.

pub mod identity;
pub mod notification;

pub use identity::{IdentityInfo, IdentityResolver};
pub use notification::NotificationSink;
