//! Data model for the shop: products, orders, and user accounts.

pub mod order;
pub mod product;
pub mod user;

pub use order::{
    Customer, Order, OrderItem, OrderNumber, OrderRequest, OrderStatus, PaymentMethod,
};
pub use product::{Product, ProductId, ProductInput};
pub use user::{LoginRequest, PublicUser, RegisterRequest, Role, User, UserId};
