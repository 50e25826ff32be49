//! Identity resolvers.
//!
//! [`HttpIdentityResolver`] queries the registration forms API;
//! [`PlaceholderIdentityResolver`] names every participant `backup_{id}`
//! when no endpoint is configured; [`StaticIdentityResolver`] serves a
//! fixed table.

pub mod fixed;
pub mod http;
pub mod placeholder;

use std::sync::Arc;

use checkin_core::config::external::IdentityConfig;
use checkin_core::result::AppResult;
use checkin_core::traits::IdentityResolver;

pub use fixed::StaticIdentityResolver;
pub use http::HttpIdentityResolver;
pub use placeholder::PlaceholderIdentityResolver;

/// Build the resolver selected by configuration.
pub fn from_config(config: &IdentityConfig) -> AppResult<Arc<dyn IdentityResolver>> {
    match &config.endpoint {
        Some(_) => Ok(Arc::new(HttpIdentityResolver::new(config)?)),
        None => Ok(Arc::new(PlaceholderIdentityResolver)),
    }
}
