//! Order and checkout endpoints.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ShopError;
use crate::types::{Order, OrderNumber, OrderRequest, OrderStatus};

use super::{bearer_token, AppState};

/// `GET /orders` (admin) — newest first.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Order>>, ShopError> {
    state.auth.authorize_admin(bearer_token(&headers)?)?;
    Ok(Json(state.orders.list()?))
}

/// `POST /orders` — full order in the response.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Order>), ShopError> {
    let order = state.orders.create(request)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `POST /checkout` — slim response for the storefront.
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Value>), ShopError> {
    let order = state.orders.create(request)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "order": {
                "orderNumber": order.order_number,
                "total": order.total,
                "shippingFee": order.shipping_fee,
            },
        })),
    ))
}

/// Status update payload.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// `PATCH /orders/:order_number/status` (admin)
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(order_number): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Order>, ShopError> {
    state.auth.authorize_admin(bearer_token(&headers)?)?;
    let order = state
        .orders
        .update_status(&OrderNumber::new(order_number), update.status)?;
    Ok(Json(order))
}
