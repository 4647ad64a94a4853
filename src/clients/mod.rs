//! Typed clients over the generic collection handles. They translate
//! `FrameworkError` into each domain's error type and add the queries the
//! storefront needs.

#[macro_use]
mod macros;

pub mod product_client;
pub mod user_client;
pub mod cart_client;
pub mod order_client;
pub mod contact_client;

pub use product_client::ProductClient;
pub use user_client::UserClient;
pub use cart_client::CartClient;
pub use order_client::OrderClient;
pub use contact_client::ContactClient;
