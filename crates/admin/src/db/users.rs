//! User repository.

use diverse_capital_core::UserId;

use super::{Store, remove_where};
use crate::models::User;

/// Repository for user operations.
pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all users in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.store.read().await.users.clone()
    }

    /// Delete a user. Returns whether a user was removed.
    ///
    /// The user's orders are kept.
    pub async fn delete(&self, id: &UserId) -> bool {
        let mut data = self.store.write().await;
        remove_where(&mut data.users, |u| &u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete() {
        let store = Store::seeded();
        assert!(!store.users().delete(&UserId::new("missing")).await);
        assert_eq!(store.users().list().await.len(), 1);

        assert!(store.users().delete(&UserId::new("1")).await);
        assert!(store.users().list().await.is_empty());
    }
}
