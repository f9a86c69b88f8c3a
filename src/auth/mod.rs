//! Registration, login, and session-based admin authorization.

mod service;

pub use service::{AuthService, Session};
