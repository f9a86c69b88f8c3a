//! # TMZ Shop
//!
//! Jersey storefront backend: product catalog CRUD, cart-to-checkout pricing
//! with tiered shipping, order persistence with a modeled status lifecycle,
//! and session-backed admin auth, exposed as an HTTP JSON API.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod errors;
pub mod orders;
pub mod store;
pub mod types;

// Re-exports for the public API
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use config::ShopConfig;
pub use errors::{ShopError, ShopResult};
pub use orders::OrderService;
pub use store::Store;
