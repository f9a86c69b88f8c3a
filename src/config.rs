//! Environment-based configuration.

use std::env;

use tracing::warn;

/// Runtime configuration.
///
/// - `SHOP_BIND_ADDR`: listen address, defaults to `0.0.0.0:3000`.
/// - `SHOP_ADMIN_CODE`: shared secret that elevates a registration to admin.
///   When unset, only the first registered account becomes admin.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Listen address for the HTTP server.
    pub bind_addr:  String,
    /// Admin registration code.
    pub admin_code: Option<String>,
}

impl ShopConfig {
    /// Reads configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("SHOP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let admin_code = match env::var("SHOP_ADMIN_CODE") {
            Ok(code) if !code.trim().is_empty() => Some(code),
            _ => {
                warn!("SHOP_ADMIN_CODE not set; admin-code registrations are disabled");
                None
            },
        };

        Self { bind_addr, admin_code }
    }
}
