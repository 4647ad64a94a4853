use tracing::{info, instrument, warn};
use crate::cart_actor::{CartAction, CartError};
use crate::clients::CartClient;
use crate::domain::Cart;
use crate::storage::{load_json, save_json, DeviceStorage, CART_KEY};

/// Keeps the session's cart consistent with wherever it is persisted:
/// device storage while anonymous, the `carts` collection once signed in.
pub struct CartReconciler {
    cart: Cart,
    owner: Option<String>,
    client: CartClient,
    rollback_on_failure: bool,
}

impl CartReconciler {
    pub fn new(client: CartClient, rollback_on_failure: bool) -> Self {
        Self {
            cart: Cart::new(),
            owner: None,
            client,
            rollback_on_failure,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Switches to the anonymous cart kept in device storage.
    pub fn load_local(&mut self, storage: &mut dyn DeviceStorage) {
        self.owner = None;
        self.cart = load_json(storage, CART_KEY).unwrap_or_default();
    }

    /// Replaces the local cart with the user's persisted cart. Anonymous
    /// items are not merged in.
    ///
    /// If loading fails the local cart is kept, but later mutations still go
    /// to the user's document.
    #[instrument(skip(self))]
    pub async fn sign_in(&mut self, user_id: &str) -> Result<(), CartError> {
        self.owner = Some(user_id.to_string());
        let cart = self.client.load_cart(user_id.to_string()).await?;
        info!(items = cart.item_count(), "Loaded persisted cart");
        self.cart = cart;
        Ok(())
    }

    pub fn sign_out(&mut self, storage: &mut dyn DeviceStorage) {
        self.load_local(storage);
    }

    /// Applies `action` locally, then persists it.
    ///
    /// Signed in, the cart actor's reply replaces the local cart. If the
    /// actor call fails the local change stays, unless rollback is enabled.
    #[instrument(skip(self, storage))]
    pub async fn apply(&mut self, action: CartAction, storage: &mut dyn DeviceStorage) -> Result<(), CartError> {
        let before = self.cart.clone();
        action.clone().apply(&mut self.cart);

        let Some(user_id) = self.owner.clone() else {
            return save_json(storage, CART_KEY, &self.cart)
                .map_err(|e| CartError::StorageError(e.to_string()));
        };

        match self.client.apply(user_id, action).await {
            Ok(stored) => {
                self.cart = stored;
                Ok(())
            }
            Err(e) => {
                if self.rollback_on_failure {
                    warn!(error = %e, "Persisting cart failed, rolling back");
                    self.cart = before;
                }
                Err(e)
            }
        }
    }

    /// Empties the local cart without touching persistence.
    pub fn discard_local(&mut self) {
        self.cart.clear();
    }
}
