//! Tests for order creation and status transitions.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use crate::errors::ShopError;
    use crate::orders::OrderService;
    use crate::store::Store;
    use crate::types::{
        Customer, OrderItem, OrderRequest, OrderStatus, PaymentMethod, ProductId,
    };

    fn service() -> OrderService {
        OrderService::new(Arc::new(Store::new()))
    }

    fn customer() -> Customer {
        Customer {
            name:    "Bat-Erdene".to_string(),
            phone:   "99112233".to_string(),
            address: "Sukhbaatar district, Ulaanbaatar".to_string(),
            email:   None,
        }
    }

    fn item(price: u64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: ProductId::new("home-2025"),
            title: "Home Jersey 2025".to_string(),
            price,
            size: "L".to_string(),
            quantity,
            name_on_jersey: Some("BAT".to_string()),
        }
    }

    fn request(items: Vec<OrderItem>) -> OrderRequest {
        OrderRequest { customer: customer(), items }
    }

    #[test]
    fn test_create_computes_number_fee_and_total() {
        let orders = service();
        let order = orders.create(request(vec![item(150_000, 1)])).expect("create should succeed");

        assert_eq!(order.shipping_fee, 6000);
        assert_eq!(order.total, 156_000);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::BankTransfer);

        let today = Utc::now().date_naive().format("%Y%m%d").to_string();
        assert!(order.order_number.as_str().starts_with(&format!("TMZ-{}-", today)));
    }

    #[test]
    fn test_create_free_shipping_at_three_units() {
        let orders = service();
        let order = orders
            .create(request(vec![item(80_000, 2), item(150_000, 1)]))
            .expect("create should succeed");

        assert_eq!(order.shipping_fee, 0);
        assert_eq!(order.total, 310_000);
    }

    #[test]
    fn test_create_rejects_empty_cart() {
        let orders = service();
        let err = orders.create(request(vec![])).expect_err("empty cart must fail");
        assert!(matches!(err, ShopError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_zero_quantity() {
        let orders = service();
        let err = orders
            .create(request(vec![item(150_000, 0)]))
            .expect_err("zero quantity must fail");
        assert!(matches!(err, ShopError::Validation(_)));
    }

    #[test]
    fn test_list_is_newest_first() {
        let orders = service();
        let first = orders.create(request(vec![item(150_000, 1)])).expect("create");
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = orders.create(request(vec![item(80_000, 3)])).expect("create");

        let listed = orders.list().expect("list should succeed");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].order_number, second.order_number);
        assert_eq!(listed[1].order_number, first.order_number);
    }

    #[test]
    fn test_total_invariant_holds_for_every_created_order() {
        let orders = service();
        for quantity in 1..=5 {
            let order = orders
                .create(request(vec![item(99_999, quantity)]))
                .expect("create should succeed");
            let items_total: u64 = order.items.iter().map(OrderItem::subtotal).sum();
            assert_eq!(order.total, items_total + order.shipping_fee);
        }
    }

    #[test]
    fn test_status_happy_path_transitions() {
        let orders = service();
        let order = orders.create(request(vec![item(150_000, 1)])).expect("create");
        let number = order.order_number.clone();

        let order = orders.update_status(&number, OrderStatus::Paid).expect("pending -> paid");
        assert_eq!(order.status, OrderStatus::Paid);

        let order = orders.update_status(&number, OrderStatus::Shipped).expect("paid -> shipped");
        assert_eq!(order.status, OrderStatus::Shipped);

        let order = orders
            .update_status(&number, OrderStatus::Delivered)
            .expect("shipped -> delivered");
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_illegal_transitions_are_rejected() {
        let orders = service();
        let order = orders.create(request(vec![item(150_000, 1)])).expect("create");
        let number = order.order_number.clone();

        // pending -> shipped skips payment.
        let err = orders
            .update_status(&number, OrderStatus::Shipped)
            .expect_err("must reject");
        assert!(matches!(err, ShopError::InvalidStatusTransition { .. }));

        // pending -> delivered skips everything.
        assert!(orders.update_status(&number, OrderStatus::Delivered).is_err());

        // Cancelled is terminal.
        orders.update_status(&number, OrderStatus::Cancelled).expect("pending -> cancelled");
        assert!(orders.update_status(&number, OrderStatus::Paid).is_err());
    }

    #[test]
    fn test_shipped_orders_cannot_be_cancelled() {
        let orders = service();
        let order = orders.create(request(vec![item(150_000, 1)])).expect("create");
        let number = order.order_number.clone();

        orders.update_status(&number, OrderStatus::Paid).expect("pending -> paid");
        orders.update_status(&number, OrderStatus::Shipped).expect("paid -> shipped");

        let err = orders
            .update_status(&number, OrderStatus::Cancelled)
            .expect_err("must reject");
        assert!(matches!(err, ShopError::InvalidStatusTransition { .. }));
    }

    #[test]
    fn test_update_status_missing_order_is_not_found() {
        let orders = service();
        let err = orders
            .update_status(
                &crate::types::OrderNumber::new("TMZ-20250101-1234"),
                OrderStatus::Paid,
            )
            .expect_err("missing order must fail");
        assert!(matches!(err, ShopError::OrderNotFound(_)));
    }

    #[test]
    fn test_transition_predicate_matches_legal_set() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Paid));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Paid.can_transition_to(Shipped));
        assert!(Paid.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Delivered));

        assert!(!Pending.can_transition_to(Delivered));
        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Paid));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(Delivered.is_final());
        assert!(Cancelled.is_final());
    }
}
