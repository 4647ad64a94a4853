use tracing::{info, instrument, warn};
use crate::clients::{ContactClient, OrderClient, ProductClient};
use crate::domain::{
    ContactMessage, MessageStatus, Order, OrderStatus, Product, ProductCreate, ProductPatch, User,
};
use super::error::AdminError;
use super::session::Session;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub products: usize,
    pub orders: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    pub revenue: f64,
    pub new_messages: usize,
}

/// Admin operations over products, orders and contact messages. Every call
/// checks that the session belongs to an admin.
#[derive(Clone)]
pub struct AdminService {
    products: ProductClient,
    orders: OrderClient,
    contact: ContactClient,
}

fn require_admin(session: &Session) -> Result<&User, AdminError> {
    session
        .user()
        .filter(|user| user.is_admin())
        .ok_or(AdminError::Forbidden)
}

impl AdminService {
    pub fn new(products: ProductClient, orders: OrderClient, contact: ContactClient) -> Self {
        Self { products, orders, contact }
    }

    pub async fn dashboard(&self, session: &Session) -> Result<DashboardStats, AdminError> {
        require_admin(session)?;
        let products = self.products.list_products().await?;
        let orders = self.orders.all_orders().await?;
        let messages = self.contact.messages_with_status(MessageStatus::New).await?;

        let delivered_orders = orders.iter().filter(|order| order.status.is_delivered()).count();
        Ok(DashboardStats {
            products: products.len(),
            orders: orders.len(),
            pending_orders: orders.len() - delivered_orders,
            delivered_orders,
            revenue: orders.iter().map(|order| order.total_amount).sum(),
            new_messages: messages.len(),
        })
    }

    // =========================================================================
    // Products
    // =========================================================================

    #[allow(dead_code)]
    pub async fn create_product(&self, session: &Session, product: ProductCreate) -> Result<String, AdminError> {
        require_admin(session)?;
        Ok(self.products.create_product(product).await?)
    }

    #[allow(dead_code)]
    pub async fn edit_product(
        &self,
        session: &Session,
        id: &str,
        patch: ProductPatch,
    ) -> Result<Product, AdminError> {
        require_admin(session)?;
        Ok(self.products.update_product(id.to_string(), patch).await?)
    }

    #[allow(dead_code)]
    pub async fn set_in_stock(&self, session: &Session, id: &str, in_stock: bool) -> Result<bool, AdminError> {
        require_admin(session)?;
        Ok(self.products.set_in_stock(id.to_string(), in_stock).await?)
    }

    #[instrument(skip(self, session))]
    #[allow(dead_code)]
    pub async fn delete_product(&self, session: &Session, id: &str) -> Result<(), AdminError> {
        require_admin(session)?;
        self.products.delete_product(id.to_string()).await?;
        info!("Product deleted");
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders newest first, optionally only those in `status`.
    #[allow(dead_code)]
    pub async fn orders(&self, session: &Session, status: Option<OrderStatus>) -> Result<Vec<Order>, AdminError> {
        require_admin(session)?;
        let orders = match status {
            Some(status) => self.orders.orders_with_status(status).await?,
            None => self.orders.all_orders().await?,
        };
        Ok(orders)
    }

    /// Sets any status directly; moves are not restricted to the linear
    /// sequence. Returns the previous status.
    #[instrument(skip(self, session))]
    pub async fn set_order_status(
        &self,
        session: &Session,
        id: &str,
        status: OrderStatus,
    ) -> Result<OrderStatus, AdminError> {
        let admin = require_admin(session)?;
        let previous = self.orders.set_status(id.to_string(), status).await?;
        if status.rank() < previous.rank() {
            warn!(admin = %admin.email, %previous, %status, "Order status moved backwards");
        }
        info!(%previous, %status, "Order status updated");
        Ok(previous)
    }

    // =========================================================================
    // Contact messages
    // =========================================================================

    #[allow(dead_code)]
    pub async fn messages(
        &self,
        session: &Session,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, AdminError> {
        require_admin(session)?;
        let messages = match status {
            Some(status) => self.contact.messages_with_status(status).await?,
            None => self.contact.all_messages().await?,
        };
        Ok(messages)
    }

    #[allow(dead_code)]
    pub async fn set_message_status(
        &self,
        session: &Session,
        id: &str,
        status: MessageStatus,
    ) -> Result<MessageStatus, AdminError> {
        require_admin(session)?;
        Ok(self.contact.set_status(id.to_string(), status).await?)
    }
}
