use tracing::{debug, info, instrument};
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use crate::actor_framework::ResourceClient;

/// Client for the `orders` collection.
///
/// Listings come back newest first.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    orders
}

impl OrderClient {
    #[instrument(skip(self, order), fields(user_id = %order.user_id, total = order.total_amount))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<String, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(order).await?;
        info!(order_id = %id, "Order stored");
        Ok(id)
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn put_order(&self, order: Order) -> Result<(), OrderError> {
        debug!("Sending request");
        Ok(self.inner.put(order).await?)
    }

    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(newest_first(self.inner.list().await?))
    }

    #[instrument(skip(self))]
    pub async fn orders_for_user(&self, user_id: String) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.query(move |order: &Order| order.user_id == user_id).await?;
        Ok(newest_first(orders))
    }

    #[instrument(skip(self))]
    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.query(move |order: &Order| order.status == status).await?;
        Ok(newest_first(orders))
    }

    /// Sets the status and returns the previous one.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: String, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, OrderAction::SetStatus(status)).await?)
    }
}
