use thiserror::Error;
use crate::cart_actor::CartError;
use crate::config::ConfigError;
use crate::contact_actor::ContactError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::storage::StorageError;
use crate::storefront::{AdminError, AuthError};
use crate::user_actor::UserError;

/// Everything that can stop the application, for `main` to report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
