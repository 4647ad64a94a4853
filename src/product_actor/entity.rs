use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::ProductAction;

fn validate(name: &str, price: f64) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is required".to_string());
    }
    if !price.is_finite() || price < 0.0 {
        return Err(format!("invalid price: {price}"));
    }
    Ok(())
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = bool;

    const COLLECTION: &'static str = "products";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Generated identifier for the product
    /// * `params` - Everything but the id
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        validate(&params.name, params.price)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            ingredients: params.ingredients,
            expiry_date: params.expiry_date,
            images: params.images,
            in_stock: params.in_stock,
        })
    }

    /// Merges the admin's edits. The patch is validated as a whole before
    /// anything is written.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        validate(
            patch.name.as_deref().unwrap_or(&self.name),
            patch.price.unwrap_or(self.price),
        )?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(expiry_date) = patch.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<bool, String> {
        match action {
            ProductAction::SetInStock(in_stock) => {
                let changed = self.in_stock != in_stock;
                self.in_stock = in_stock;
                Ok(changed)
            }
        }
    }
}
