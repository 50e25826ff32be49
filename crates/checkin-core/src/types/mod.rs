//! Shared value types: exam sites and secondary-index keys.

pub mod keys;
pub mod site;

pub use keys::{IndexKey, SiteSeatKey, UsedSiteKey};
pub use site::Site;
