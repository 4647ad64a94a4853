use tracing::{debug, info, instrument};
use crate::domain::{Category, Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductError};
use crate::actor_framework::ResourceClient;

/// Client for the `products` collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        let id = self.inner.create(product).await?;
        info!(product_id = %id, "Product created");
        Ok(id)
    }

    /// Writes a product under its own id, replacing any existing document.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn put_product(&self, product: Product) -> Result<(), ProductError> {
        debug!("Sending request");
        Ok(self.inner.put(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: Category) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.query(move |product: &Product| product.category == category).await?)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn set_in_stock(&self, id: String, in_stock: bool) -> Result<bool, ProductError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, ProductAction::SetInStock(in_stock)).await?)
    }
}
