use tracing::{instrument, warn};
use crate::cart_actor::CartAction;
use crate::domain::{Order, OrderCreate};
use crate::order_actor::OrderError;
use super::session::Session;

impl Session {
    /// Turns the cart into an order and empties the cart.
    ///
    /// Requires a signed-in user and a non-empty cart. Once the order is
    /// stored the local cart is always emptied; failing to clear the
    /// persisted cart only raises a notice.
    #[instrument(skip(self))]
    pub async fn place_order(&mut self) -> Result<String, OrderError> {
        let Some(user) = self.user.clone() else {
            self.notices.error("You must be logged in to place an order", &OrderError::Unauthenticated);
            return Err(OrderError::Unauthenticated);
        };
        if self.cart.cart().is_empty() {
            self.notices.error("Your cart is empty", &OrderError::EmptyCart);
            return Err(OrderError::EmptyCart);
        }

        let order = OrderCreate {
            user_id: user.id.clone(),
            items: self.cart.cart().snapshot(),
            total_amount: self.cart.cart().total_amount(),
        };
        let order_id = match self.orders.create_order(order).await {
            Ok(id) => id,
            Err(e) => {
                self.notices.error("Failed to place order", &e);
                return Err(e);
            }
        };

        if let Err(e) = self.cart.apply(CartAction::Clear, self.storage.as_mut()).await {
            warn!(order_id = %order_id, error = %e, "Order stored but cart not cleared remotely");
            self.notices.error("Failed to clear cart", &e);
        }
        self.cart.discard_local();

        self.notices.success("Order placed successfully!");
        Ok(order_id)
    }

    /// The signed-in user's orders, newest first. Empty when signed out.
    pub async fn my_orders(&mut self) -> Result<Vec<Order>, OrderError> {
        let Some(user) = &self.user else {
            return Ok(Vec::new());
        };
        let result = self.orders.orders_for_user(user.id.clone()).await;
        if let Err(e) = &result {
            self.notices.error("Failed to load your orders", e);
        }
        result
    }

    #[allow(dead_code)]
    pub async fn get_order(&mut self, id: &str) -> Result<Option<Order>, OrderError> {
        let result = self.orders.get_order(id.to_string()).await;
        if let Err(e) = &result {
            self.notices.error("Failed to load order details", e);
        }
        result
    }
}
