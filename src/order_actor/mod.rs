//! Order documents and the admin status action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
