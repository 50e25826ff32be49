//! One-time credential tokens.

pub mod generator;
pub mod store;

pub use generator::generate_token;
pub use store::TokenStore;
