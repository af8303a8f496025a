//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const RESTAURANT_SELECT: &str = "SELECT id, name, address, avatar, is_verified, category_id, owner_id, created_at, updated_at FROM restaurant";

/// Escape LIKE wildcards so a search query is matched literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let sql = format!("{RESTAURANT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_owner(pool: &SqlitePool, owner_id: i64) -> RepoResult<Vec<Restaurant>> {
    let sql = format!("{RESTAURANT_SELECT} WHERE owner_id = ? ORDER BY created_at, id");
    let rows = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    owner_id: i64,
    category_id: i64,
    data: &RestaurantCreate,
) -> RepoResult<Restaurant> {
    let id = snowflake_id();
    let now = now_millis();
    let address = data.address.as_deref().unwrap_or("Online");
    let avatar = data.avatar.as_deref().unwrap_or("default-avatar.png");
    sqlx::query(
        "INSERT INTO restaurant (id, name, address, avatar, is_verified, category_id, owner_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(address)
    .bind(avatar)
    .bind(category_id)
    .bind(owner_id)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

/// Partial update: only supplied fields are written. The owner column is
/// deliberately absent — ownership never changes after creation.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    category_id: Option<i64>,
    data: &RestaurantUpdate,
) -> RepoResult<Restaurant> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE restaurant SET name = COALESCE(?1, name), address = COALESCE(?2, address), avatar = COALESCE(?3, avatar), category_id = COALESCE(?4, category_id), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.avatar)
    .bind(category_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
}

/// Delete-request semantics: clear the verified flag, keep the row.
pub async fn unverify(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = now_millis();
    let rows = sqlx::query("UPDATE restaurant SET is_verified = 0, updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// One page of the public feed plus the total row count.
pub async fn find_page(
    pool: &SqlitePool,
    page: i64,
    page_size: i64,
) -> RepoResult<(Vec<Restaurant>, i64)> {
    let offset = (page - 1) * page_size;
    let sql = format!("{RESTAURANT_SELECT} ORDER BY created_at, id LIMIT ? OFFSET ?");
    let rows = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurant")
        .fetch_one(pool)
        .await?;
    Ok((rows, total))
}

pub async fn find_by_category_page(
    pool: &SqlitePool,
    category_id: i64,
    page: i64,
    page_size: i64,
) -> RepoResult<Vec<Restaurant>> {
    let offset = (page - 1) * page_size;
    let sql =
        format!("{RESTAURANT_SELECT} WHERE category_id = ? ORDER BY created_at, id LIMIT ? OFFSET ?");
    let rows = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(category_id)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Case-insensitive substring match on name. The pattern is parameter-bound
/// and wildcard-escaped; the search text can never alter the query.
pub async fn search_by_name(
    pool: &SqlitePool,
    query: &str,
    page: i64,
    page_size: i64,
) -> RepoResult<(Vec<Restaurant>, i64)> {
    let pattern = format!("%{}%", escape_like(query));
    let offset = (page - 1) * page_size;
    let sql = format!(
        "{RESTAURANT_SELECT} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY created_at, id LIMIT ?2 OFFSET ?3"
    );
    let rows = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(&pattern)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM restaurant WHERE name LIKE ?1 ESCAPE '\\'",
    )
    .bind(&pattern)
    .fetch_one(pool)
    .await?;
    Ok((rows, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_escaping_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("pizza"), "pizza");
    }
}
