//! Order service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::checkout;
use crate::errors::{ShopError, ShopResult};
use crate::store::Store;
use crate::types::{Order, OrderNumber, OrderRequest, OrderStatus, PaymentMethod};

/// How many fresh order numbers to try before giving up on a create.
const ORDER_NUMBER_ATTEMPTS: u32 = 5;

/// Order management over the shared store.
#[derive(Debug, Clone)]
pub struct OrderService {
    store: Arc<Store>,
}

impl OrderService {
    /// Creates an order service over the given store.
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Creates an order from a checkout request.
    ///
    /// Prices the cart, generates an order number, and persists. The 4-digit
    /// suffix has no uniqueness guarantee, so a duplicate-key conflict
    /// triggers regeneration with a fresh suffix.
    ///
    /// # Errors
    /// Returns a validation error for a malformed payload, or an internal
    /// error if no free order number is found after several attempts.
    pub fn create(&self, request: OrderRequest) -> ShopResult<Order> {
        request.validate()?;
        let quote = checkout::quote(&request.items)?;
        let now = Utc::now();

        for _ in 0..ORDER_NUMBER_ATTEMPTS {
            let order = Order {
                order_number:   checkout::order_number(now.date_naive()),
                customer:       request.customer.clone(),
                items:          request.items.clone(),
                total:          quote.total,
                shipping_fee:   quote.shipping_fee,
                status:         OrderStatus::Pending,
                payment_method: PaymentMethod::BankTransfer,
                created_at:     now,
                updated_at:     now,
            };

            match self.store.insert_order(order.clone()) {
                Ok(()) => {
                    info!(
                        order_number = %order.order_number,
                        total = order.total,
                        shipping_fee = order.shipping_fee,
                        "order created"
                    );
                    return Ok(order);
                },
                Err(ShopError::OrderNumberTaken(number)) => {
                    warn!(order_number = %number, "order number collision, regenerating");
                },
                Err(err) => return Err(err),
            }
        }

        Err(ShopError::InternalError(
            "Could not allocate a unique order number".into(),
        ))
    }

    /// All orders, most recent first.
    pub fn list(&self) -> ShopResult<Vec<Order>> {
        let mut orders = self.store.list_orders()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Gets an order by number.
    ///
    /// # Errors
    /// Returns not-found if the order does not exist.
    pub fn get(&self, number: &OrderNumber) -> ShopResult<Order> {
        self.store.get_order(number)
    }

    /// Moves an order to a new status.
    ///
    /// # Errors
    /// Returns not-found for a missing order, or a validation error when the
    /// transition is not in the legal set.
    pub fn update_status(&self, number: &OrderNumber, next: OrderStatus) -> ShopResult<Order> {
        let mut order = self.store.get_order(number)?;

        if !order.status.can_transition_to(next) {
            return Err(ShopError::InvalidStatusTransition {
                from: order.status.as_str(),
                to:   next.as_str(),
            });
        }

        order.status = next;
        order.updated_at = Utc::now();
        self.store.replace_order(order.clone())?;

        info!(order_number = %number, status = next.as_str(), "order status updated");
        Ok(order)
    }
}
