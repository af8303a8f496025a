//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserRole};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const USER_SELECT: &str =
    "SELECT id, email, password_hash, role, created_at, updated_at FROM user";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a new account. The unique email index turns a concurrent duplicate
/// into [`RepoError::Duplicate`].
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    role: UserRole,
) -> RepoResult<User> {
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO user (id, email, password_hash, role, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
