//! Product catalog service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::errors::ShopResult;
use crate::store::Store;
use crate::types::{Product, ProductId, ProductInput};

/// Product catalog CRUD over the shared store.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<Store>,
}

impl CatalogService {
    /// Creates a catalog service over the given store.
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All products, newest first.
    pub fn list(&self) -> ShopResult<Vec<Product>> {
        let mut products = self.store.list_products()?;
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    /// Creates a product.
    ///
    /// # Errors
    /// Returns a validation error for a malformed payload, or a conflict if
    /// the product ID already exists.
    pub fn create(&self, input: ProductInput) -> ShopResult<Product> {
        input.validate()?;
        let product = Product::from_input(input, Utc::now());
        self.store.insert_product(product.clone())?;
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Updates a product by ID, refreshing its `updated_at` timestamp.
    ///
    /// # Errors
    /// Returns a validation error for a malformed payload, or not-found if
    /// the product does not exist.
    pub fn update(&self, id: &ProductId, input: ProductInput) -> ShopResult<Product> {
        input.validate()?;
        let mut product = self.store.get_product(id)?;
        product.apply(input, Utc::now());
        self.store.replace_product(product.clone())?;
        info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Deletes a product by ID.
    ///
    /// # Errors
    /// Returns not-found if the product does not exist, so a repeated delete
    /// of the same ID fails.
    pub fn delete(&self, id: &ProductId) -> ShopResult<()> {
        self.store.remove_product(id)?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
