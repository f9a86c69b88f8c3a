//! User account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ShopError, ShopResult};

/// Unique user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generates a fresh user ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role. Controls access to the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Whether the role grants admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A stored account. The password exists only as an argon2 PHC hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id:            UserId,
    pub username:      String,
    pub email:         String,
    pub password_hash: String,
    pub role:          Role,
    pub created_at:    DateTime<Utc>,
}

impl User {
    /// Public projection of the account. Never exposes the hash.
    #[must_use]
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id:       self.id,
            username: self.username.clone(),
            email:    self.email.clone(),
            role:     self.role,
        }
    }
}

/// What the API returns about an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id:       UserId,
    pub username: String,
    pub email:    String,
    pub role:     Role,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username:   String,
    pub email:      String,
    pub password:   String,
    #[serde(rename = "adminCode", default)]
    pub admin_code: Option<String>,
}

impl RegisterRequest {
    /// Validates the payload.
    ///
    /// # Errors
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> ShopResult<()> {
        if self.username.trim().len() < 3 {
            return Err(ShopError::Validation(
                "Username must be at least 3 characters".into(),
            ));
        }
        if !is_plausible_email(&self.email) {
            return Err(ShopError::Validation("Please enter a valid email".into()));
        }
        if self.password.len() < 6 {
            return Err(ShopError::Validation(
                "Password must be at least 6 characters".into(),
            ));
        }
        Ok(())
    }
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Validates the payload shape. Credential checking happens later.
    ///
    /// # Errors
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> ShopResult<()> {
        if self.username.trim().len() < 3 {
            return Err(ShopError::Validation(
                "Username must be at least 3 characters".into(),
            ));
        }
        if self.password.len() < 6 {
            return Err(ShopError::Validation(
                "Password must be at least 6 characters".into(),
            ));
        }
        Ok(())
    }
}

/// Cheap shape check: one `@` with a dot somewhere after it.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
