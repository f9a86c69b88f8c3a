//! Error types for the shop backend.

use std::fmt;

/// Shop-wide errors.
///
/// The API layer owns the mapping from these variants to HTTP statuses;
/// services only ever speak in terms of this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Lock acquisition failed.
    LockError,
    /// Malformed or missing request field.
    Validation(String),
    /// Product not found.
    ProductNotFound(String),
    /// Product already exists.
    ProductAlreadyExists(String),
    /// Order not found.
    OrderNotFound(String),
    /// Order number already taken.
    OrderNumberTaken(String),
    /// Illegal order status transition.
    InvalidStatusTransition {
        /// Current status (wire name).
        from: &'static str,
        /// Requested status (wire name).
        to:   &'static str,
    },
    /// Username or email already registered.
    UserAlreadyExists,
    /// Bad credentials. Carries no detail so that unknown usernames and
    /// wrong passwords are indistinguishable to the caller.
    InvalidCredentials,
    /// Missing, invalid, or insufficient session.
    Unauthorized,
    /// Internal error.
    InternalError(String),
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockError => write!(f, "Failed to acquire lock"),
            Self::Validation(msg) => write!(f, "{}", msg),
            Self::ProductNotFound(id) => write!(f, "Product not found: {}", id),
            Self::ProductAlreadyExists(id) => write!(f, "Product already exists: {}", id),
            Self::OrderNotFound(number) => write!(f, "Order not found: {}", number),
            Self::OrderNumberTaken(number) => {
                write!(f, "Order number already taken: {}", number)
            },
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot change order status from {} to {}", from, to)
            },
            Self::UserAlreadyExists => write!(f, "Username or email already exists"),
            Self::InvalidCredentials => write!(f, "Invalid username or password"),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ShopError {}

/// Result type for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
