//! Storefront services built on the collection clients: browsing, sessions
//! (auth, cart, checkout) and the admin surface.

pub mod notice;
mod cart;
mod session;
mod checkout;
pub mod auth;
pub mod catalog;
pub mod admin;
pub mod error;

pub use admin::AdminService;
pub use auth::AuthService;
pub use catalog::Catalog;
pub use error::{AdminError, AuthError};
pub use session::Session;

use crate::clients::{CartClient, ContactClient, OrderClient};
use crate::storage::DeviceStorage;

/// Cloneable bundle of everything a front end needs.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: Catalog,
    pub auth: AuthService,
    pub admin: AdminService,
    pub contact: ContactClient,
    orders: OrderClient,
    carts: CartClient,
    cart_rollback: bool,
}

impl Storefront {
    pub fn new(
        catalog: Catalog,
        auth: AuthService,
        admin: AdminService,
        contact: ContactClient,
        orders: OrderClient,
        carts: CartClient,
        cart_rollback: bool,
    ) -> Self {
        Self { catalog, auth, admin, contact, orders, carts, cart_rollback }
    }

    /// Opens a session on a device, restoring whoever was signed in there.
    pub async fn open_session(&self, storage: Box<dyn DeviceStorage>) -> Session {
        Session::open(
            self.auth.clone(),
            self.orders.clone(),
            self.carts.clone(),
            self.cart_rollback,
            storage,
        )
        .await
    }
}
