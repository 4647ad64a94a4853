use tracing::instrument;
use crate::clients::ProductClient;
use crate::domain::{Category, Product};
use crate::product_actor::ProductError;

/// Read side of the catalog used by the product pages.
#[derive(Clone)]
pub struct Catalog {
    products: ProductClient,
}

fn by_name(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    products
}

impl Catalog {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    #[allow(dead_code)]
    pub async fn all_products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(by_name(self.products.list_products().await?))
    }

    pub async fn by_category(&self, category: Category) -> Result<Vec<Product>, ProductError> {
        Ok(by_name(self.products.products_by_category(category).await?))
    }

    /// Products matching an optional category and a free-text term. An empty
    /// term matches everything.
    #[instrument(skip(self))]
    pub async fn browse(&self, category: Option<Category>, term: &str) -> Result<Vec<Product>, ProductError> {
        let products = match category {
            Some(category) => self.products.products_by_category(category).await?,
            None => self.products.list_products().await?,
        };
        Ok(by_name(products.into_iter().filter(|product| product.matches_search(term)).collect()))
    }

    /// `None` for unknown ids.
    #[allow(dead_code)]
    pub async fn product(&self, id: &str) -> Result<Option<Product>, ProductError> {
        self.products.get_product(id.to_string()).await
    }
}
