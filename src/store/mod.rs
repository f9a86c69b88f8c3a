//! In-process document store.
//!
//! Three collections (products, orders, users), each a unique-keyed map
//! behind its own mutex. The store is constructed once and passed explicitly
//! into every service; [`shared`] is the guarded process-wide accessor, so
//! concurrent early requests share a single initialization instead of racing
//! to build N stores.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::{ShopError, ShopResult};
use crate::types::{Order, OrderNumber, Product, ProductId, User, UserId};

static STORE: OnceCell<Arc<Store>> = OnceCell::const_new();

/// Returns the process-wide store, initializing it on first call.
pub async fn shared() -> Arc<Store> {
    STORE
        .get_or_init(|| async {
            info!("initializing shop store");
            Arc::new(Store::new())
        })
        .await
        .clone()
}

/// The shop's persistent state.
#[derive(Debug)]
pub struct Store {
    /// Products indexed by ID.
    products:          Mutex<HashMap<ProductId, Product>>,
    /// Orders indexed by order number.
    orders:            Mutex<HashMap<OrderNumber, Order>>,
    /// Users indexed by ID.
    users:             Mutex<HashMap<UserId, User>>,
    /// Username -> user ID index.
    users_by_username: Mutex<HashMap<String, UserId>>,
    /// Email -> user ID index.
    users_by_email:    Mutex<HashMap<String, UserId>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products:          Mutex::new(HashMap::new()),
            orders:            Mutex::new(HashMap::new()),
            users:             Mutex::new(HashMap::new()),
            users_by_username: Mutex::new(HashMap::new()),
            users_by_email:    Mutex::new(HashMap::new()),
        }
    }

    // ========================================================================
    // PRODUCTS
    // ========================================================================

    /// Inserts a product.
    ///
    /// # Errors
    /// Returns an error if the product ID already exists.
    pub fn insert_product(&self, product: Product) -> ShopResult<()> {
        let mut products = self.products.lock().map_err(|_| ShopError::LockError)?;
        if products.contains_key(&product.id) {
            return Err(ShopError::ProductAlreadyExists(product.id.to_string()));
        }
        products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Gets a product by ID.
    ///
    /// # Errors
    /// Returns an error if the product is not found.
    pub fn get_product(&self, id: &ProductId) -> ShopResult<Product> {
        let products = self.products.lock().map_err(|_| ShopError::LockError)?;
        products
            .get(id)
            .cloned()
            .ok_or_else(|| ShopError::ProductNotFound(id.to_string()))
    }

    /// All products, unsorted.
    pub fn list_products(&self) -> ShopResult<Vec<Product>> {
        let products = self.products.lock().map_err(|_| ShopError::LockError)?;
        Ok(products.values().cloned().collect())
    }

    /// Replaces an existing product.
    ///
    /// # Errors
    /// Returns an error if the product is not found.
    pub fn replace_product(&self, product: Product) -> ShopResult<()> {
        let mut products = self.products.lock().map_err(|_| ShopError::LockError)?;
        if !products.contains_key(&product.id) {
            return Err(ShopError::ProductNotFound(product.id.to_string()));
        }
        products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Removes a product.
    ///
    /// # Errors
    /// Returns an error if the product is not found.
    pub fn remove_product(&self, id: &ProductId) -> ShopResult<Product> {
        let mut products = self.products.lock().map_err(|_| ShopError::LockError)?;
        products
            .remove(id)
            .ok_or_else(|| ShopError::ProductNotFound(id.to_string()))
    }

    // ========================================================================
    // ORDERS
    // ========================================================================

    /// Inserts an order.
    ///
    /// # Errors
    /// Returns an error if the order number is already taken.
    pub fn insert_order(&self, order: Order) -> ShopResult<()> {
        let mut orders = self.orders.lock().map_err(|_| ShopError::LockError)?;
        if orders.contains_key(&order.order_number) {
            return Err(ShopError::OrderNumberTaken(order.order_number.to_string()));
        }
        orders.insert(order.order_number.clone(), order);
        Ok(())
    }

    /// Gets an order by number.
    ///
    /// # Errors
    /// Returns an error if the order is not found.
    pub fn get_order(&self, number: &OrderNumber) -> ShopResult<Order> {
        let orders = self.orders.lock().map_err(|_| ShopError::LockError)?;
        orders
            .get(number)
            .cloned()
            .ok_or_else(|| ShopError::OrderNotFound(number.to_string()))
    }

    /// All orders, unsorted.
    pub fn list_orders(&self) -> ShopResult<Vec<Order>> {
        let orders = self.orders.lock().map_err(|_| ShopError::LockError)?;
        Ok(orders.values().cloned().collect())
    }

    /// Replaces an existing order.
    ///
    /// # Errors
    /// Returns an error if the order is not found.
    pub fn replace_order(&self, order: Order) -> ShopResult<()> {
        let mut orders = self.orders.lock().map_err(|_| ShopError::LockError)?;
        if !orders.contains_key(&order.order_number) {
            return Err(ShopError::OrderNotFound(order.order_number.to_string()));
        }
        orders.insert(order.order_number.clone(), order);
        Ok(())
    }

    // ========================================================================
    // USERS
    // ========================================================================

    /// Inserts a user, enforcing joint username+email uniqueness.
    ///
    /// # Errors
    /// Returns an error if the username or email is already registered.
    pub fn insert_user(&self, user: User) -> ShopResult<()> {
        let mut users = self.users.lock().map_err(|_| ShopError::LockError)?;
        let mut by_username = self.users_by_username.lock().map_err(|_| ShopError::LockError)?;
        let mut by_email = self.users_by_email.lock().map_err(|_| ShopError::LockError)?;

        if by_username.contains_key(&user.username) || by_email.contains_key(&user.email) {
            return Err(ShopError::UserAlreadyExists);
        }

        by_username.insert(user.username.clone(), user.id);
        by_email.insert(user.email.clone(), user.id);
        users.insert(user.id, user);
        Ok(())
    }

    /// Looks up a user by username.
    pub fn find_user_by_username(&self, username: &str) -> ShopResult<Option<User>> {
        let users = self.users.lock().map_err(|_| ShopError::LockError)?;
        let by_username = self.users_by_username.lock().map_err(|_| ShopError::LockError)?;
        Ok(by_username.get(username).and_then(|id| users.get(id).cloned()))
    }

    /// Gets a user by ID.
    pub fn get_user(&self, id: UserId) -> ShopResult<Option<User>> {
        let users = self.users.lock().map_err(|_| ShopError::LockError)?;
        Ok(users.get(&id).cloned())
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> ShopResult<usize> {
        let users = self.users.lock().map_err(|_| ShopError::LockError)?;
        Ok(users.len())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{Customer, OrderStatus, PaymentMethod};

    fn order(number: &str) -> Order {
        let now = Utc::now();
        Order {
            order_number:   OrderNumber::new(number),
            customer:       Customer {
                name:    "Bat-Erdene".to_string(),
                phone:   "99112233".to_string(),
                address: "Ulaanbaatar".to_string(),
                email:   None,
            },
            items:          Vec::new(),
            total:          156_000,
            shipping_fee:   6000,
            status:         OrderStatus::Pending,
            payment_method: PaymentMethod::BankTransfer,
            created_at:     now,
            updated_at:     now,
        }
    }

    #[test]
    fn test_duplicate_order_number_conflicts() {
        let store = Store::new();
        store.insert_order(order("TMZ-20250101-1234")).expect("first insert");

        let err = store
            .insert_order(order("TMZ-20250101-1234"))
            .expect_err("duplicate number must fail");
        assert!(matches!(err, ShopError::OrderNumberTaken(_)));

        // A different suffix goes through; this is what the order service's
        // regeneration loop relies on.
        store.insert_order(order("TMZ-20250101-5678")).expect("fresh number");
    }

    #[test]
    fn test_replace_missing_order_is_not_found() {
        let store = Store::new();
        let err = store.replace_order(order("TMZ-20250101-1234")).expect_err("must fail");
        assert!(matches!(err, ShopError::OrderNotFound(_)));
    }
}
