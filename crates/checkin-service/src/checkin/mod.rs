//! Sign-in state machine, seat updates and lookups.

pub mod engine;
pub mod lookup;

pub use engine::CheckInEngine;
pub use lookup::LookupKey;
