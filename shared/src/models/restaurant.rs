//! Restaurant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub avatar: String,
    /// Cleared instead of deleting the row; restaurants are immortal once
    /// created.
    pub is_verified: bool,
    /// Category reference (nullable; category removal sets it NULL)
    pub category_id: Option<i64>,
    /// Owner reference (required, immutable after creation)
    pub owner_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[validate(length(min = 5))]
    pub name: String,
    #[validate(length(min = 5))]
    pub address: Option<String>,
    pub avatar: Option<String>,
    /// Free-text category name, resolved to a slugged record on create
    pub category_name: String,
}

/// Update restaurant payload — only supplied fields are written
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantUpdate {
    #[validate(length(min = 5))]
    pub name: Option<String>,
    #[validate(length(min = 5))]
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub category_name: Option<String>,
}
