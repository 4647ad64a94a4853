pub mod user;
pub mod product;
pub mod cart;
pub mod order;
pub mod contact;

pub use user::*;
pub use product::*;
pub use cart::*;
pub use order::*;
pub use contact::*;
