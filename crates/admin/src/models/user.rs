//! Platform users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use diverse_capital_core::{UserId, UserRole, UserStatus};

/// A registered user. No credentials are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub joined_at: DateTime<Utc>,
    pub status: UserStatus,
}
