//! Tests for the HTTP boundary: status mapping, token parsing, wire shapes.

#[cfg(test)]
mod tests {
    use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode};

    use crate::api::bearer_token;
    use crate::errors::ShopError;
    use crate::types::{OrderRequest, Product, ProductInput};

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ShopError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShopError::InvalidStatusTransition { from: "pending", to: "delivered" }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShopError::ProductAlreadyExists("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ShopError::UserAlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ShopError::ProductNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::OrderNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ShopError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ShopError::LockError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShopError::InternalError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers).expect("token"), "abc123");
    }

    #[test]
    fn test_missing_or_malformed_authorization_is_unauthorized() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err(ShopError::Unauthorized));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), Err(ShopError::Unauthorized));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), Err(ShopError::Unauthorized));
    }

    #[test]
    fn test_product_wire_field_names() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "id": "home-2025",
            "title": "Home Jersey 2025",
            "description": "Official home jersey, player edition.",
            "price": 150_000,
            "price_on_sale": 120_000,
            "image": "https://cdn.example.com/jerseys/home-2025.jpg",
            "sizes": ["M", "L"],
        }))
        .expect("deserialize input");

        assert_eq!(input.sale_price, Some(120_000));
        assert_eq!(input.category, "jersey");
        assert!(input.in_stock);

        let product = Product::from_input(input, chrono::Utc::now());
        let value = serde_json::to_value(&product).expect("serialize product");
        let object = value.as_object().expect("object");

        assert!(object.contains_key("price_on_sale"));
        assert!(object.contains_key("inStock"));
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
        assert!(!object.contains_key("sale_price"));
    }

    #[test]
    fn test_order_request_wire_shape() {
        let request: OrderRequest = serde_json::from_value(serde_json::json!({
            "customer": {
                "name": "Bat-Erdene",
                "phone": "99112233",
                "address": "Sukhbaatar district, Ulaanbaatar",
            },
            "items": [{
                "productId": "home-2025",
                "title": "Home Jersey 2025",
                "price": 150_000,
                "size": "L",
                "quantity": 2,
                "nameOnJersey": "BAT",
            }],
        }))
        .expect("deserialize order request");

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[0].name_on_jersey.as_deref(), Some("BAT"));
        assert_eq!(request.customer.email, None);
        request.validate().expect("valid request");
    }

    #[test]
    fn test_order_status_wire_names() {
        use crate::types::OrderStatus;

        let json = serde_json::to_string(&OrderStatus::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");

        let status: OrderStatus = serde_json::from_str("\"cancelled\"").expect("deserialize");
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_payment_method_wire_name() {
        use crate::types::PaymentMethod;

        let json = serde_json::to_string(&PaymentMethod::BankTransfer).expect("serialize");
        assert_eq!(json, "\"bankTransfer\"");
    }
}
