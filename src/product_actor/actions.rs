/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Marks the product as in or out of stock.
    ///
    /// Returns whether the flag actually changed.
    SetInStock(bool),
}
