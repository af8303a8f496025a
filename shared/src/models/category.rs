//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `name` is the canonical display form (trimmed, lowercased); `slug` is the
/// unique URL-safe derivation of it. Both come from [`crate::util::slugify`]
/// and friends — categories are never created with free-form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
