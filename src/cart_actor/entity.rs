use std::convert::Infallible;
use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{Cart, StoredCart};
use super::actions::CartAction;

impl Entity for StoredCart {
    type Id = String;
    type CreateParams = Infallible;
    type Patch = ();
    type Action = CartAction;
    type ActionResult = Cart;

    const COLLECTION: &'static str = "carts";

    fn id(&self) -> &String { &self.user_id }

    fn from_create_params(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// A user without a cart document has an empty cart.
    fn on_missing(user_id: &String) -> Option<Self> {
        Some(StoredCart::empty(user_id.clone()))
    }

    /// Applies a cart mutation and stamps `updated_at`.
    fn handle_action(&mut self, action: CartAction) -> Result<Cart, String> {
        action.apply(&mut self.items);
        self.updated_at = Utc::now();
        Ok(self.items.clone())
    }
}
