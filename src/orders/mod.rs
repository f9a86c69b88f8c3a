//! Order creation, listing, and status transitions.

mod service;
#[cfg(test)]
mod tests;

pub use service::OrderService;
