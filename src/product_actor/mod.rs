//! Catalog documents: validation on create/edit and the stock toggle action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
