use tracing::{debug, instrument};
use crate::domain::{Cart, StoredCart};
use crate::cart_actor::{CartAction, CartError};
use crate::actor_framework::ResourceClient;

/// Client for the `carts` collection, keyed by user id.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<StoredCart>,
}

impl_client_new!(CartClient, StoredCart);

impl CartClient {
    /// The user's persisted cart. A user without a cart document has an empty cart.
    #[instrument(skip(self))]
    pub async fn load_cart(&self, user_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        let stored = self.inner.get(user_id).await?;
        Ok(stored.map(|stored| stored.items).unwrap_or_default())
    }

    /// Applies `action` to the user's cart document. The cart actor creates
    /// the document on first use.
    ///
    /// Returns the cart as stored after the action.
    #[instrument(skip(self, action))]
    pub async fn apply(&self, user_id: String, action: CartAction) -> Result<Cart, CartError> {
        debug!(?action, "Sending request");
        Ok(self.inner.perform_action(user_id, action).await?)
    }
}
