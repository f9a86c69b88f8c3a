//! Product catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShopError, ShopResult};

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Creates a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product.
///
/// Prices are integer minor currency units. `sale_price`, when present, is
/// strictly less than `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID (admin-chosen slug).
    pub id:          ProductId,
    /// Display title.
    pub title:       String,
    /// Long description.
    pub description: String,
    /// Regular price.
    pub price:       u64,
    /// Discounted price, when the product is on sale.
    #[serde(rename = "price_on_sale")]
    pub sale_price:  Option<u64>,
    /// Primary image URL.
    pub image:       String,
    /// Available size labels. Never empty.
    pub sizes:       Vec<String>,
    /// Category slug.
    pub category:    String,
    /// Whether the product can currently be ordered.
    #[serde(rename = "inStock")]
    pub in_stock:    bool,
    /// When the product was created.
    #[serde(rename = "createdAt")]
    pub created_at:  DateTime<Utc>,
    /// When the product was last modified.
    #[serde(rename = "updatedAt")]
    pub updated_at:  DateTime<Utc>,
}

impl Product {
    /// Builds a product from a validated input payload.
    #[must_use]
    pub fn from_input(input: ProductInput, now: DateTime<Utc>) -> Self {
        Self {
            id:          ProductId::new(input.id),
            title:       input.title,
            description: input.description,
            price:       input.price,
            sale_price:  input.sale_price,
            image:       input.image,
            sizes:       input.sizes,
            category:    input.category,
            in_stock:    input.in_stock,
            created_at:  now,
            updated_at:  now,
        }
    }

    /// Applies an update payload, preserving `created_at` and refreshing
    /// `updated_at`.
    pub fn apply(&mut self, input: ProductInput, now: DateTime<Utc>) {
        self.title = input.title;
        self.description = input.description;
        self.price = input.price;
        self.sale_price = input.sale_price;
        self.image = input.image;
        self.sizes = input.sizes;
        self.category = input.category;
        self.in_stock = input.in_stock;
        self.updated_at = now;
    }

    /// The price a buyer actually pays.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

fn default_category() -> String {
    "jersey".to_string()
}

fn default_in_stock() -> bool {
    true
}

/// Create/update payload for a product. Timestamps are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub id:          String,
    pub title:       String,
    pub description: String,
    pub price:       u64,
    #[serde(rename = "price_on_sale", default)]
    pub sale_price:  Option<u64>,
    pub image:       String,
    pub sizes:       Vec<String>,
    #[serde(default = "default_category")]
    pub category:    String,
    #[serde(rename = "inStock", default = "default_in_stock")]
    pub in_stock:    bool,
}

impl ProductInput {
    /// Validates the payload before it reaches the catalog.
    ///
    /// # Errors
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> ShopResult<()> {
        if self.id.trim().is_empty() {
            return Err(ShopError::Validation("Product ID is required".into()));
        }
        if self.title.trim().len() < 3 {
            return Err(ShopError::Validation(
                "Title must be at least 3 characters".into(),
            ));
        }
        if self.description.trim().len() < 10 {
            return Err(ShopError::Validation(
                "Description must be at least 10 characters".into(),
            ));
        }
        if self.price == 0 {
            return Err(ShopError::Validation(
                "Price must be a positive number".into(),
            ));
        }
        if let Some(sale) = self.sale_price {
            if sale >= self.price {
                return Err(ShopError::Validation(
                    "Sale price must be less than the regular price".into(),
                ));
            }
        }
        if !self.image.starts_with("http://") && !self.image.starts_with("https://") {
            return Err(ShopError::Validation("Image must be a valid URL".into()));
        }
        if self.sizes.is_empty() {
            return Err(ShopError::Validation("At least one size is required".into()));
        }
        Ok(())
    }
}
