use thiserror::Error;
use crate::contact_actor::ContactError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already in use: {0}")]
    EmailInUse(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("First name is required")]
    MissingName,
    #[error("Not logged in")]
    NotLoggedIn,
    #[error(transparent)]
    User(#[from] UserError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("Admin access required")]
    Forbidden,
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Contact(#[from] ContactError),
}
