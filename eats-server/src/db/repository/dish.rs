//! Dish Repository
//!
//! Option groups live in a JSON column on the dish row; they are a value
//! object, not a table of their own.

use super::{RepoError, RepoResult};
use shared::models::{Dish, DishCreate, DishOption, DishUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const DISH_SELECT: &str = "SELECT id, name, price, photo, description, options, restaurant_id, created_at, updated_at FROM dish";

fn encode_options(options: &[DishOption]) -> RepoResult<String> {
    serde_json::to_string(options)
        .map_err(|e| RepoError::Database(format!("Failed to encode dish options: {e}")))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Dish>> {
    let sql = format!("{DISH_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Dish>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_restaurant(pool: &SqlitePool, restaurant_id: i64) -> RepoResult<Vec<Dish>> {
    let sql = format!("{DISH_SELECT} WHERE restaurant_id = ? ORDER BY name");
    let rows = sqlx::query_as::<_, Dish>(&sql)
        .bind(restaurant_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: &DishCreate) -> RepoResult<Dish> {
    let id = snowflake_id();
    let now = now_millis();
    let options = encode_options(&data.options)?;
    sqlx::query(
        "INSERT INTO dish (id, name, price, photo, description, options, restaurant_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.photo)
    .bind(&data.description)
    .bind(options)
    .bind(data.restaurant_id)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dish".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &DishUpdate) -> RepoResult<Dish> {
    let now = now_millis();
    let options = match &data.options {
        Some(options) => Some(encode_options(options)?),
        None => None,
    };
    let rows = sqlx::query(
        "UPDATE dish SET name = COALESCE(?1, name), price = COALESCE(?2, price), photo = COALESCE(?3, photo), description = COALESCE(?4, description), options = COALESCE(?5, options), updated_at = ?6 WHERE id = ?7",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.photo)
    .bind(&data.description)
    .bind(options)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dish {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dish {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM dish WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
