//! Product catalog endpoints.
//!
//! Reads are public; every mutation requires an admin session.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

use crate::errors::ShopError;
use crate::types::{Product, ProductId, ProductInput};

use super::{bearer_token, AppState};

/// `GET /products`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ShopError> {
    Ok(Json(state.catalog.list()?))
}

/// `POST /products` (admin)
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ShopError> {
    state.auth.authorize_admin(bearer_token(&headers)?)?;
    let product = state.catalog.create(input)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /products/:id` (admin)
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ShopError> {
    state.auth.authorize_admin(bearer_token(&headers)?)?;
    let product = state.catalog.update(&ProductId::new(id), input)?;
    Ok(Json(product))
}

/// `DELETE /products/:id` (admin)
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ShopError> {
    state.auth.authorize_admin(bearer_token(&headers)?)?;
    state.catalog.delete(&ProductId::new(id))?;
    Ok(Json(json!({ "success": true })))
}
