//! Site settings repository.

use super::Store;
use crate::models::{SiteSettings, SiteSettingsPatch};

/// Repository for the site settings singleton.
pub struct SettingsRepository<'a> {
    store: &'a Store,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get the current settings.
    pub async fn get(&self) -> SiteSettings {
        self.store.read().await.settings.clone()
    }

    /// Merge `patch` into the settings and return the result.
    pub async fn update(&self, patch: SiteSettingsPatch) -> SiteSettings {
        let mut data = self.store.write().await;
        patch.apply_to(&mut data.settings);
        data.settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_is_a_merge() {
        let store = Store::seeded();
        let before = store.settings().get().await;

        let after = store
            .settings()
            .update(SiteSettingsPatch {
                contact_email: Some("x".to_string()),
                ..SiteSettingsPatch::default()
            })
            .await;

        assert_eq!(after.contact_email, "x");
        assert_eq!(
            SiteSettings {
                contact_email: before.contact_email.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(store.settings().get().await, after);
    }
}
