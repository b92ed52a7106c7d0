//! Site-wide settings (singleton).

use serde::{Deserialize, Serialize};

use super::merge_fields;

/// Bank details, contact information and editable page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub swift_code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub about_us_content: String,
    pub header_content: String,
    pub footer_content: String,
}

/// Partial settings update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteSettingsPatch {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub swift_code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub about_us_content: Option<String>,
    pub header_content: Option<String>,
    pub footer_content: Option<String>,
}

impl SiteSettingsPatch {
    /// Overwrite the provided fields on `settings`.
    pub fn apply_to(self, settings: &mut SiteSettings) {
        merge_fields!(self => settings;
            bank_name,
            account_number,
            account_name,
            swift_code,
            contact_email,
            contact_phone,
            contact_address,
            about_us_content,
            header_content,
            footer_content,
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_email_patch_leaves_bank_details() {
        let mut settings = SiteSettings {
            bank_name: "Global Wealth Bank".to_string(),
            account_number: "1234567890".to_string(),
            contact_email: "support@example.com".to_string(),
            ..SiteSettings::default()
        };

        let patch: SiteSettingsPatch =
            serde_json::from_value(json!({ "contactEmail": "x" })).unwrap();
        patch.apply_to(&mut settings);

        assert_eq!(settings.contact_email, "x");
        assert_eq!(settings.bank_name, "Global Wealth Bank");
        assert_eq!(settings.account_number, "1234567890");
    }

    #[test]
    fn test_unknown_setting_rejected() {
        let result = serde_json::from_value::<SiteSettingsPatch>(json!({ "theme": "dark" }));
        assert!(result.is_err());
    }
}
