use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::OrderAction;

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = (); // Orders are immutable apart from their status
    type Action = OrderAction;
    type ActionResult = OrderStatus;

    const COLLECTION: &'static str = "orders";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `placed` and the current time.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("an order needs at least one item".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            items: params.items,
            total_amount: params.total_amount,
            status: OrderStatus::Placed,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn on_delete(&self) -> Result<(), String> {
        Err(format!("order {} cannot be deleted", self.id))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, String> {
        match action {
            OrderAction::SetStatus(status) => Ok(std::mem::replace(&mut self.status, status)),
        }
    }
}
