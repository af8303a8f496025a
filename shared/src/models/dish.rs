//! Dish Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single selectable choice inside an option group, with its price delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishOptionChoice {
    pub name: String,
    /// Price delta in cents
    #[serde(default)]
    pub extra: i64,
}

/// An option group on a dish (e.g. "Size" with choices S/M/L).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishOption {
    pub name: String,
    /// Price delta in cents applied by picking the group at all
    #[serde(default)]
    pub extra: i64,
    #[serde(default)]
    pub choices: Vec<DishOptionChoice>,
}

/// Dish entity
///
/// Option groups are stored as a JSON column; they are a value object of the
/// dish, not rows of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub photo: Option<String>,
    pub description: String,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub options: Vec<DishOption>,
    /// Owning restaurant reference
    pub restaurant_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DishCreate {
    pub restaurant_id: i64,
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    pub photo: Option<String>,
    #[validate(length(min = 5))]
    pub description: String,
    #[serde(default)]
    pub options: Vec<DishOption>,
}

/// Update dish payload — only supplied fields are written
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DishUpdate {
    #[validate(length(min = 2))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    pub photo: Option<String>,
    #[validate(length(min = 5))]
    pub description: Option<String>,
    pub options: Option<Vec<DishOption>>,
}
