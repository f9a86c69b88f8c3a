//! HTTP JSON API.
//!
//! Thin handlers over the services: decode, authorize where required,
//! delegate, encode. All failures funnel through [`ShopError`]'s
//! status mapping in [`error`].

mod auth;
mod error;
mod orders;
mod products;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
    http::HeaderMap,
    routing::{get, patch, post, put},
    Router,
};

use crate::auth::AuthService;
use crate::catalog::CatalogService;
use crate::config::ShopConfig;
use crate::errors::{ShopError, ShopResult};
use crate::orders::OrderService;
use crate::store::Store;

/// Shared handler state: one instance of each service over one store.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub orders:  OrderService,
    pub auth:    AuthService,
}

impl AppState {
    /// Wires the services over a single injected store.
    #[must_use]
    pub fn new(store: Arc<Store>, config: &ShopConfig) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&store)),
            orders:  OrderService::new(Arc::clone(&store)),
            auth:    AuthService::new(store, config.admin_code.clone()),
        }
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", put(products::update).delete(products::remove))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:order_number/status", patch(orders::update_status))
        .route("/checkout", post(orders::checkout))
        .with_state(state)
}

/// Pulls the bearer token out of the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> ShopResult<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(ShopError::Unauthorized)
}
