//! User profiles and their stored credentials.

pub mod entity;
pub mod credentials;
pub mod error;

pub use credentials::*;
pub use error::*;
