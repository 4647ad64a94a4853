use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::Product;

/// A product snapshot and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The set of cart lines for one session, at most one line per product id.
///
/// Serialized as a bare list of items, which is also the device storage shape.
/// Loading goes through `From<Vec<CartItem>>` so duplicate lines are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Adds `quantity` of `product`, incrementing an existing line instead of duplicating it.
    ///
    /// A zero quantity leaves the cart untouched.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    pub fn remove(&mut self, product_id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.product.id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Sets the quantity of an existing line. Zero or less removes the line.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id).is_some();
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities, recomputed on every call.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price × quantity, recomputed on every call.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Deep copy of the current lines, as stored on an order.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.product, item.quantity);
        }
        cart
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// The persisted cart document, keyed by the owning user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCart {
    pub user_id: String,
    pub items: Cart,
    pub updated_at: DateTime<Utc>,
}

impl StoredCart {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Cart::new(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::fixtures::product;

    #[test]
    fn test_adding_same_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(product("1", "Milk", 4.0), 1);
        cart.add(product("1", "Milk", 4.0), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 3);
    }

    #[test]
    fn test_zero_or_negative_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(product("1", "Milk", 4.0), 2);
        cart.add(product("2", "Lassi", 2.0), 1);

        assert!(cart.set_quantity("1", 0));
        assert!(cart.get("1").is_none());
        assert!(cart.set_quantity("2", -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("1", "Milk", 4.0), 2);
        assert!(!cart.set_quantity("9", 5));
        assert!(cart.set_quantity("1", 7));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let mut cart = Cart::new();
        cart.add(product("1", "Milk", 4.0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_derived_totals_follow_contents() {
        let mut cart = Cart::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0.0);

        cart.add(product("1", "Milk", 2.5), 2);
        cart.add(product("2", "Shrikhand", 6.0), 3);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total_amount(), 23.0);

        cart.set_quantity("2", 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_amount(), 11.0);

        cart.remove("1");
        assert_eq!(cart.total_amount(), 6.0);
    }

    #[test]
    fn test_from_items_merges_duplicate_lines() {
        let cart = Cart::from(vec![
            CartItem { product: product("1", "Milk", 1.0), quantity: 1 },
            CartItem { product: product("1", "Milk", 1.0), quantity: 4 },
        ]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_cart_serializes_as_item_list() {
        let mut cart = Cart::new();
        cart.add(product("1", "Milk", 1.0), 2);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 2);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
