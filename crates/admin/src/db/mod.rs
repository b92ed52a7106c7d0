//! In-memory data store for the admin API.
//!
//! # Collections
//!
//! - `products` - Investment products
//! - `users` - Registered users
//! - `orders` - Orders (informal links to users and products)
//! - `messages` - Contact-form messages
//! - `settings` - Site settings singleton
//!
//! Nothing is persisted: the store is built once at startup (optionally
//! seeded with fixtures) and lives as long as the process. It is shared
//! through [`AppState`](crate::state::AppState); cloning a [`Store`] clones a
//! handle, not the data.
//!
//! Each repository call takes the lock once for its whole
//! read-modify-write, so concurrent requests never observe a half-applied
//! update.

pub mod fixtures;
pub mod messages;
pub mod orders;
pub mod products;
pub mod settings;
pub mod users;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{AdminDashboardStats, Message, Order, Product, SiteSettings, User};

pub use messages::MessageRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use settings::SettingsRepository;
pub use users::UserRepository;

/// The five collections held by the store.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub messages: Vec<Message>,
    pub settings: SiteSettings,
}

/// Shared handle to the in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// Create a store holding the given collections.
    #[must_use]
    pub fn new(collections: Collections) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    /// Create a store with empty collections and blank settings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store populated with the demo fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(fixtures::collections())
    }

    /// Product operations.
    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// User operations.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    /// Order operations.
    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(self)
    }

    /// Message operations.
    #[must_use]
    pub const fn messages(&self) -> MessageRepository<'_> {
        MessageRepository::new(self)
    }

    /// Site settings operations.
    #[must_use]
    pub const fn settings(&self) -> SettingsRepository<'_> {
        SettingsRepository::new(self)
    }

    /// Dashboard aggregates computed from a single consistent snapshot.
    pub async fn dashboard_stats(&self) -> AdminDashboardStats {
        let data = self.read().await;
        AdminDashboardStats::compute(&data.products, &data.users, &data.orders)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }
}

/// Remove every element matching `pred`, reporting whether any was removed.
fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}
