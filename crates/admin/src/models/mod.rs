//! Domain models for the admin API.
//!
//! Every entity is a flat record serialized in `camelCase`, matching what
//! the web front end reads and writes. Updates go through typed patch
//! structs: each field is optional and unknown keys are rejected, so a
//! patch can only ever overwrite fields the entity actually has.

pub mod message;
pub mod order;
pub mod product;
pub mod settings;
pub mod stats;
pub mod user;

pub use message::{Message, MessagePatch, NewMessage};
pub use order::{Order, OrderPatch};
pub use product::{Product, ProductPatch};
pub use settings::{SiteSettings, SiteSettingsPatch};
pub use stats::AdminDashboardStats;
pub use user::User;

/// Shallow merge: copy every `Some` field of a patch onto the target.
macro_rules! merge_fields {
    ($patch:expr => $target:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

pub(crate) use merge_fields;
