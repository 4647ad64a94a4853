use tracing::{info, instrument};
use crate::cart_actor::{CartAction, CartError};
use crate::clients::{CartClient, OrderClient};
use crate::domain::{Cart, Product, User, UserPatch};
use crate::storage::{load_json, save_json, DeviceStorage, USER_KEY};
use super::auth::AuthService;
use super::cart::CartReconciler;
use super::error::AuthError;
use super::notice::{Notice, Notices};

/// One device's view of the store: who is signed in, their cart, and the
/// notices waiting to be shown.
///
/// A session counts as signed in exactly when a user is stored on the device.
pub struct Session {
    pub(super) user: Option<User>,
    pub(super) cart: CartReconciler,
    pub(super) storage: Box<dyn DeviceStorage>,
    pub(super) notices: Notices,
    pub(super) auth: AuthService,
    pub(super) orders: OrderClient,
}

impl Session {
    /// Restores the stored user (if any) and the matching cart. The stored
    /// copy is only trusted for the id; everything else is re-read.
    pub(super) async fn open(
        auth: AuthService,
        orders: OrderClient,
        carts: CartClient,
        cart_rollback: bool,
        mut storage: Box<dyn DeviceStorage>,
    ) -> Self {
        let mut cart = CartReconciler::new(carts, cart_rollback);
        cart.load_local(storage.as_mut());
        let user: Option<User> = load_json(storage.as_mut(), USER_KEY);

        let mut session = Self {
            user: None,
            cart,
            storage,
            notices: Notices::default(),
            auth,
            orders,
        };
        if let Some(stored) = user {
            let user = session.auth.restore(stored).await;
            info!(user_id = %user.id, role = ?user.role, "Restored session");
            session.remember(&user);
            session.user = Some(user.clone());
            session.load_user_cart(&user.id).await;
        }
        session
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[allow(dead_code)]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    #[allow(dead_code)]
    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.cart().item_count()
    }

    pub fn total_amount(&self) -> f64 {
        self.cart.cart().total_amount()
    }

    /// Drains the notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    // =========================================================================
    // Auth
    // =========================================================================

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.auth.login(email, password).await {
            Ok(user) => {
                let message = if user.is_admin() { "Admin login successful" } else { "Login successful" };
                self.begin(user.clone()).await;
                self.notices.success(message);
                Ok(user)
            }
            Err(e) => {
                self.notices.error("Login failed. Please check your credentials.", &e);
                Err(e)
            }
        }
    }

    #[instrument(skip(self, password))]
    #[allow(dead_code)]
    pub async fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        match self.auth.register(first_name, last_name, email, password).await {
            Ok(user) => {
                self.begin(user.clone()).await;
                self.notices.success("Registration successful");
                Ok(user)
            }
            Err(e) => {
                self.notices.error("Registration failed. Please try again.", &e);
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(USER_KEY) {
            self.notices.error("Failed to clear stored session", &e);
        }
        self.user = None;
        self.cart.sign_out(self.storage.as_mut());
        self.notices.info("Logged out successfully");
    }

    #[allow(dead_code)]
    pub async fn update_profile(&mut self, patch: UserPatch) -> Result<User, AuthError> {
        let Some(user) = self.user.clone() else {
            return Err(AuthError::NotLoggedIn);
        };
        match self.auth.update_profile(&user, patch).await {
            Ok(updated) => {
                self.remember(&updated);
                self.user = Some(updated.clone());
                self.notices.success("Profile updated");
                Ok(updated)
            }
            Err(e) => {
                self.notices.error("Failed to update profile", &e);
                Err(e)
            }
        }
    }

    async fn begin(&mut self, user: User) {
        self.remember(&user);
        self.user = Some(user.clone());
        self.load_user_cart(&user.id).await;
    }

    fn remember(&mut self, user: &User) {
        if let Err(e) = save_json(self.storage.as_mut(), USER_KEY, user) {
            self.notices.error("Failed to remember your session", &e);
        }
    }

    async fn load_user_cart(&mut self, user_id: &str) {
        if let Err(e) = self.cart.sign_in(user_id).await {
            self.notices.error("Failed to load your cart", &e);
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub async fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        let already_in_cart = self.cart.cart().get(&product.id).is_some();
        let action = CartAction::Add { product: product.clone(), quantity };
        let result = self.cart.apply(action, self.storage.as_mut()).await;
        match &result {
            Ok(()) if already_in_cart => {
                self.notices.success(format!("Updated quantity of {} in your cart", product.name))
            }
            Ok(()) => self.notices.success(format!("Added {} to your cart", product.name)),
            Err(e) => self.notices.error("Failed to add item to cart", e),
        }
        result
    }

    pub async fn remove_from_cart(&mut self, product_id: &str) -> Result<(), CartError> {
        let name = self.cart.cart().get(product_id).map(|item| item.product.name.clone());
        let result = self
            .cart
            .apply(CartAction::Remove(product_id.to_string()), self.storage.as_mut())
            .await;
        match (&result, name) {
            (Ok(()), Some(name)) => self.notices.info(format!("Removed {name} from your cart")),
            (Ok(()), None) => {}
            (Err(e), _) => self.notices.error("Failed to remove item from cart", e),
        }
        result
    }

    /// Zero or less removes the item.
    #[allow(dead_code)]
    pub async fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id).await;
        }
        let action = CartAction::SetQuantity { product_id: product_id.to_string(), quantity };
        let result = self.cart.apply(action, self.storage.as_mut()).await;
        if let Err(e) = &result {
            self.notices.error("Failed to update item quantity", e);
        }
        result
    }

    #[allow(dead_code)]
    pub async fn clear_cart(&mut self) -> Result<(), CartError> {
        let result = self.cart.apply(CartAction::Clear, self.storage.as_mut()).await;
        match &result {
            Ok(()) => self.notices.info("Cart has been cleared"),
            Err(e) => self.notices.error("Failed to clear cart", e),
        }
        result
    }
}
