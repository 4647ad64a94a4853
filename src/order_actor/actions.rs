use crate::domain::OrderStatus;

/// The only mutation an order accepts after creation.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Sets any status directly, returning the previous one.
    SetStatus(OrderStatus),
}
