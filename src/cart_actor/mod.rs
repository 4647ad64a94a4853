//! Persisted per-user carts. Every mutation runs as an action inside the
//! cart actor, so read-modify-write happens in one place.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
