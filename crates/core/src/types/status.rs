//! Sector, status and role enums for the platform's entities.
//!
//! JSON representations match the labels the web front end displays, so
//! `ProductCategory::OilGas` travels as `"Oil & Gas"` and `UserRole::Admin`
//! as `"admin"`.

use serde::{Deserialize, Serialize};

/// Error returned when parsing one of the enums in this module from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Investment sector a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Crypto,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Gold,
    Agriculture,
    #[serde(rename = "Oil & Gas")]
    OilGas,
    #[serde(rename = "Financial Services")]
    FinancialServices,
}

impl ProductCategory {
    /// All sectors, in the order the site lists them.
    pub const ALL: [Self; 6] = [
        Self::Crypto,
        Self::RealEstate,
        Self::Gold,
        Self::Agriculture,
        Self::OilGas,
        Self::FinancialServices,
    ];

    /// Display label, identical to the JSON form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crypto => "Crypto",
            Self::RealEstate => "Real Estate",
            Self::Gold => "Gold",
            Self::Agriculture => "Agriculture",
            Self::OilGas => "Oil & Gas",
            Self::FinancialServices => "Financial Services",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ParseEnumError::new("product category", s))
    }
}

/// Whether a product is offered to investors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(ParseEnumError::new("product status", s)),
        }
    }
}

/// Lifecycle of an investment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    /// Investment is live and paying out.
    Profits,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order's amount counts towards revenue.
    #[must_use]
    pub const fn counts_as_revenue(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Profits => write!(f, "Profits"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Profits" => Ok(Self::Profits),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseEnumError::new("order status", s)),
        }
    }
}

/// Platform user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Back-office access.
    Admin,
    /// Regular investor.
    #[default]
    User,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(ParseEnumError::new("user role", s)),
        }
    }
}

/// Account standing of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ParseEnumError::new("user status", s)),
        }
    }
}
