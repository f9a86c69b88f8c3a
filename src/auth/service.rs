//! Auth service.
//!
//! Passwords exist at rest only as salted argon2 PHC strings. Login failures
//! are uniform: an unknown username and a wrong password both come back as
//! [`ShopError::InvalidCredentials`], so usernames cannot be enumerated.
//!
//! Authorization is server-verified on every privileged request: login issues
//! an opaque session token and the admin gate re-checks the stored role, so a
//! client-cached role flag is never trusted.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ShopError, ShopResult};
use crate::store::Store;
use crate::types::{LoginRequest, PublicUser, RegisterRequest, Role, User, UserId};

/// A server-side login session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Account the session belongs to.
    pub user_id:    UserId,
    /// Role captured at login.
    pub role:       Role,
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
}

/// Account registration, login, and admin authorization.
#[derive(Debug, Clone)]
pub struct AuthService {
    store:        Arc<Store>,
    /// Shared secret that elevates a registration to admin.
    admin_code:   Option<String>,
    /// Live sessions indexed by token.
    sessions:     Arc<Mutex<HashMap<String, Session>>>,
    /// Serializes role assignment with the insert, so two concurrent first
    /// registrations cannot both observe an empty store and both become admin.
    registration: Arc<Mutex<()>>,
}

impl AuthService {
    /// Creates an auth service over the given store.
    #[must_use]
    pub fn new(store: Arc<Store>, admin_code: Option<String>) -> Self {
        Self {
            store,
            admin_code,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            registration: Arc::new(Mutex::new(())),
        }
    }

    /// Registers an account.
    ///
    /// The first account ever becomes admin regardless of the supplied code;
    /// later registrations become admin only when the code matches the
    /// configured secret.
    ///
    /// # Errors
    /// Returns a validation error for a malformed payload, or a conflict when
    /// the username or email is already registered.
    pub fn register(&self, request: RegisterRequest) -> ShopResult<PublicUser> {
        request.validate()?;

        // Hash before taking the guard; argon2 is deliberately slow.
        let password_hash = hash_password(&request.password)?;

        let _guard = self.registration.lock().map_err(|_| ShopError::LockError)?;
        let role = self.assign_role(request.admin_code.as_deref())?;

        let user = User {
            id: UserId::generate(),
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            password_hash,
            role,
            created_at: Utc::now(),
        };

        let public = user.public();
        self.store.insert_user(user)?;
        info!(username = %public.username, role = ?public.role, "user registered");
        Ok(public)
    }

    /// Logs in and issues a session token.
    ///
    /// # Errors
    /// Returns the generic credentials error for both unknown usernames and
    /// wrong passwords.
    pub fn login(&self, request: LoginRequest) -> ShopResult<(PublicUser, String)> {
        request.validate()?;

        let user = self
            .store
            .find_user_by_username(request.username.trim())?
            .ok_or(ShopError::InvalidCredentials)?;

        verify_password(&request.password, &user.password_hash)?;

        let token = Uuid::new_v4().simple().to_string();
        let session = Session {
            user_id:    user.id,
            role:       user.role,
            created_at: Utc::now(),
        };

        let mut sessions = self.sessions.lock().map_err(|_| ShopError::LockError)?;
        sessions.insert(token.clone(), session);

        info!(username = %user.username, "user logged in");
        Ok((user.public(), token))
    }

    /// Resolves a session token to its account, requiring the admin role.
    ///
    /// The role is re-read from the store rather than taken from the session,
    /// so a stale session cannot outlive a demotion.
    ///
    /// # Errors
    /// Returns an authorization error for a missing/unknown token or a
    /// non-admin account.
    pub fn authorize_admin(&self, token: &str) -> ShopResult<PublicUser> {
        let session = {
            let sessions = self.sessions.lock().map_err(|_| ShopError::LockError)?;
            sessions.get(token).cloned().ok_or(ShopError::Unauthorized)?
        };

        let user = self
            .store
            .get_user(session.user_id)?
            .ok_or(ShopError::Unauthorized)?;

        if !user.role.is_admin() {
            warn!(username = %user.username, "non-admin session on privileged request");
            return Err(ShopError::Unauthorized);
        }

        Ok(user.public())
    }

    /// Invalidates a session token. Unknown tokens are a no-op.
    pub fn logout(&self, token: &str) -> ShopResult<()> {
        let mut sessions = self.sessions.lock().map_err(|_| ShopError::LockError)?;
        sessions.remove(token);
        Ok(())
    }

    /// First account is admin; otherwise the admin code decides.
    fn assign_role(&self, supplied_code: Option<&str>) -> ShopResult<Role> {
        if self.store.user_count()? == 0 {
            return Ok(Role::Admin);
        }
        match (&self.admin_code, supplied_code) {
            (Some(expected), Some(supplied)) if supplied == expected => Ok(Role::Admin),
            _ => Ok(Role::User),
        }
    }
}

/// Hashes a password into a salted PHC string.
fn hash_password(password: &str) -> ShopResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ShopError::InternalError(format!("password hashing failed: {err}")))
}

/// Verifies a password against a stored PHC string.
fn verify_password(password: &str, stored: &str) -> ShopResult<()> {
    let parsed = PasswordHash::new(stored)
        .map_err(|err| ShopError::InternalError(format!("corrupt password hash: {err}")))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ShopError::InvalidCredentials)
}
