//! Category Repository
//!
//! Categories have no free-form create path: every row comes out of
//! [`get_or_create`], which canonicalizes the display name and slug.

use super::{RepoError, RepoResult};
use shared::models::Category;
use shared::util::{normalize_category_name, now_millis, slugify, snowflake_id};
use sqlx::SqlitePool;

const CATEGORY_SELECT: &str =
    "SELECT id, name, slug, cover_image, created_at, updated_at FROM category";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let sql = format!("{CATEGORY_SELECT} ORDER BY name");
    let rows = sqlx::query_as::<_, Category>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Category>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE slug = ? LIMIT 1");
    let row = sqlx::query_as::<_, Category>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Resolve a free-text category name to its canonical record, creating the
/// record if the slug is new.
///
/// The UNIQUE slug index makes this atomic: `INSERT OR IGNORE` is a no-op
/// when the slug already exists, and the fetch below sees whichever insert
/// won. Concurrent callers with the same name can never produce two rows.
pub async fn get_or_create(pool: &SqlitePool, raw_name: &str) -> RepoResult<Category> {
    let name = normalize_category_name(raw_name);
    let slug = slugify(raw_name);
    if slug.is_empty() {
        return Err(RepoError::Validation("Category name must not be empty".into()));
    }
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT OR IGNORE INTO category (id, name, slug, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(id)
    .bind(&name)
    .bind(&slug)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_slug(pool, &slug)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to resolve category '{slug}'")))
}

/// Restaurants currently filed under the category. Backs the computed
/// `restaurantCount` API field.
pub async fn count_restaurants(pool: &SqlitePool, category_id: i64) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM restaurant WHERE category_id = ?",
    )
    .bind(category_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
