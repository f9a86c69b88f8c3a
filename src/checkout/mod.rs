//! Order number generation and cart pricing.
//!
//! Pure computation: no storage, no clock reads. Callers supply the date and
//! the line items; the order service owns persistence and collision handling.


use chrono::NaiveDate;
use rand::Rng;

use crate::errors::{ShopError, ShopResult};
use crate::types::{OrderItem, OrderNumber};

/// Order-number prefix.
pub const ORDER_PREFIX: &str = "TMZ";

/// Total units at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: u32 = 3;

/// Flat shipping fee below the free-shipping threshold, in minor currency
/// units.
pub const FLAT_SHIPPING_FEE: u64 = 6000;

/// Priced summary of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Sum of quantities across all lines.
    pub total_quantity: u32,
    /// Sum of line subtotals.
    pub items_total:    u64,
    /// Shipping fee after tiering.
    pub shipping_fee:   u64,
    /// `items_total + shipping_fee`.
    pub total:          u64,
}

/// Prices a cart.
///
/// All arithmetic is checked: a schema-valid body with absurd prices or
/// quantities is rejected instead of wrapping the total.
///
/// # Errors
/// Returns a validation error for an empty cart or a cart whose totals do
/// not fit the currency range.
pub fn quote(items: &[OrderItem]) -> ShopResult<Quote> {
    if items.is_empty() {
        return Err(ShopError::Validation(
            "Order must contain at least one item".into(),
        ));
    }

    let mut total_quantity: u32 = 0;
    let mut items_total: u64 = 0;
    for item in items {
        total_quantity = total_quantity
            .checked_add(item.quantity)
            .ok_or_else(cart_too_large)?;
        let line = u64::from(item.quantity)
            .checked_mul(item.price)
            .ok_or_else(cart_too_large)?;
        items_total = items_total.checked_add(line).ok_or_else(cart_too_large)?;
    }

    let shipping_fee = shipping_fee(total_quantity);
    let total = items_total.checked_add(shipping_fee).ok_or_else(cart_too_large)?;

    Ok(Quote {
        total_quantity,
        items_total,
        shipping_fee,
        total,
    })
}

fn cart_too_large() -> ShopError {
    ShopError::Validation("Order totals exceed the representable amount".into())
}

/// Shipping fee for a given total unit count.
#[must_use]
pub fn shipping_fee(total_quantity: u32) -> u64 {
    if total_quantity >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Generates an order number for the given date: `TMZ-YYYYMMDD-RRRR` with a
/// uniform 4-digit random suffix.
///
/// The suffix carries no uniqueness guarantee by itself; the order service
/// regenerates on a duplicate-key conflict.
#[must_use]
pub fn order_number(date: NaiveDate) -> OrderNumber {
    let suffix: u32 = rand::rng().random_range(1000..=9999);
    OrderNumber::new(format!(
        "{}-{}-{}",
        ORDER_PREFIX,
        date.format("%Y%m%d"),
        suffix
    ))
}
