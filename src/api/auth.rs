//! Auth endpoints.

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::errors::ShopError;
use crate::types::{LoginRequest, RegisterRequest};

use super::{bearer_token, AppState};

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ShopError> {
    let user = state.auth.register(request)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "user": user })),
    ))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, ShopError> {
    let (user, token) = state.auth.login(request)?;
    Ok(Json(json!({ "success": true, "user": user, "token": token })))
}

/// `POST /auth/logout`
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ShopError> {
    let token = bearer_token(&headers)?;
    state.auth.logout(token)?;
    Ok(Json(json!({ "success": true })))
}
