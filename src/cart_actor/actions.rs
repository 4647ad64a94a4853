use crate::domain::{Cart, Product};

/// Mutations applied to a cart, both locally and inside the cart actor.
#[derive(Debug, Clone)]
pub enum CartAction {
    Add { product: Product, quantity: u32 },
    Remove(String),
    /// Zero or less removes the line.
    SetQuantity { product_id: String, quantity: i64 },
    Clear,
}

impl CartAction {
    pub fn apply(self, cart: &mut Cart) {
        match self {
            CartAction::Add { product, quantity } => cart.add(product, quantity),
            CartAction::Remove(product_id) => {
                cart.remove(&product_id);
            }
            CartAction::SetQuantity { product_id, quantity } => {
                cart.set_quantity(&product_id, quantity);
            }
            CartAction::Clear => cart.clear(),
        }
    }
}
