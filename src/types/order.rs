//! Order types: customers, line items, statuses, and the order record itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShopError, ShopResult};
use crate::types::product::ProductId;

/// Unique order number, `TMZ-YYYYMMDD-RRRR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(pub String);

impl OrderNumber {
    /// Creates an order number from an existing string.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status.
///
/// Orders are immutable after checkout except for status transitions, and
/// only the transitions admitted by [`OrderStatus::can_transition_to`] are
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting payment. Every order starts here.
    #[default]
    Pending,
    /// Bank transfer confirmed.
    Paid,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer. Terminal.
    Delivered,
    /// Cancelled before shipping. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Paid | Self::Cancelled)
                | (Self::Paid, Self::Shipped | Self::Cancelled)
                | (Self::Shipped, Self::Delivered)
        )
    }

    /// Whether the status admits no further transitions.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Accepted payment methods. Bank transfer is acknowledged out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Manual bank transfer.
    #[default]
    #[serde(rename = "bankTransfer")]
    BankTransfer,
}

/// Customer details embedded in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name:    String,
    pub phone:   String,
    pub address: String,
    #[serde(default)]
    pub email:   Option<String>,
}

impl Customer {
    fn validate(&self) -> ShopResult<()> {
        if self.name.trim().is_empty() {
            return Err(ShopError::Validation("Customer name is required".into()));
        }
        if self.phone.trim().is_empty() {
            return Err(ShopError::Validation("Customer phone is required".into()));
        }
        if self.address.trim().is_empty() {
            return Err(ShopError::Validation("Customer address is required".into()));
        }
        Ok(())
    }
}

/// A single ordered line: one product in one size, with the price and title
/// snapshotted at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product the line refers to.
    #[serde(rename = "productId")]
    pub product_id:     ProductId,
    /// Title snapshot.
    pub title:          String,
    /// Unit price snapshot.
    pub price:          u64,
    /// Chosen size label.
    pub size:           String,
    /// Units ordered, at least 1.
    pub quantity:       u32,
    /// Optional personalization text printed on the jersey.
    #[serde(rename = "nameOnJersey", default)]
    pub name_on_jersey: Option<String>,
}

impl OrderItem {
    fn validate(&self) -> ShopResult<()> {
        if self.product_id.as_str().trim().is_empty() {
            return Err(ShopError::Validation("Item product ID is required".into()));
        }
        if self.title.trim().is_empty() {
            return Err(ShopError::Validation("Item title is required".into()));
        }
        if self.price == 0 {
            return Err(ShopError::Validation(
                "Item price must be a positive number".into(),
            ));
        }
        if self.size.trim().is_empty() {
            return Err(ShopError::Validation("Item size is required".into()));
        }
        if self.quantity == 0 {
            return Err(ShopError::Validation(
                "Item quantity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Line subtotal, saturating at the currency range.
    ///
    /// Carts whose exact totals would not fit are rejected at pricing time,
    /// so stored orders never reach the saturation point.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// A persisted order.
///
/// `total` always equals the sum of line subtotals plus `shipping_fee`,
/// computed once at creation and frozen thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderNumber")]
    pub order_number:   OrderNumber,
    pub customer:       Customer,
    pub items:          Vec<OrderItem>,
    pub total:          u64,
    #[serde(rename = "shippingFee")]
    pub shipping_fee:   u64,
    pub status:         OrderStatus,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "createdAt")]
    pub created_at:     DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at:     DateTime<Utc>,
}

/// Checkout payload: who is buying and what. Everything else (order number,
/// shipping fee, total, status) is computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: Customer,
    #[serde(default)]
    pub items:    Vec<OrderItem>,
}

impl OrderRequest {
    /// Validates the payload before any pricing is computed.
    ///
    /// # Errors
    /// Returns a validation error for an empty cart or a malformed line item.
    pub fn validate(&self) -> ShopResult<()> {
        self.customer.validate()?;
        if self.items.is_empty() {
            return Err(ShopError::Validation("Order must contain at least one item".into()));
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
