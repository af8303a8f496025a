//! Restaurant Service
//!
//! Orchestrates catalog operations across the category, restaurant and dish
//! repositories. Every mutating operation re-verifies ownership through
//! [`ensure_owner`] before touching a row.

use shared::models::{
    Category, Dish, DishCreate, DishUpdate, Restaurant, RestaurantCreate, RestaurantUpdate,
};
use sqlx::SqlitePool;
use validator::Validate;

use super::{ServiceError, ServiceResult};
use crate::auth::CurrentUser;
use crate::db::repository::{category, dish, restaurant};

/// Page size of the public restaurant feed
pub const RESTAURANTS_PAGE_SIZE: i64 = 3;
/// Page size of the category drill-down
pub const CATEGORY_PAGE_SIZE: i64 = 25;
/// Page size of name search
pub const SEARCH_PAGE_SIZE: i64 = 25;

/// A page of restaurants plus pagination totals
#[derive(Debug)]
pub struct RestaurantPage {
    pub restaurants: Vec<Restaurant>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// Category drill-down: the category record plus a page of its restaurants
#[derive(Debug)]
pub struct CategoryPage {
    pub category: Category,
    pub restaurants: Vec<Restaurant>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// The single ownership predicate applied by every mutating operation.
fn ensure_owner(actor: &CurrentUser, owner_id: i64) -> ServiceResult<()> {
    if actor.id != owner_id {
        return Err(ServiceError::Forbidden("you do not own this restaurant"));
    }
    Ok(())
}

fn total_pages(count: i64, page_size: i64) -> i64 {
    (count + page_size - 1) / page_size
}

/// Pages are 1-based; anything below clamps to the first page.
fn clamp_page(page: i64) -> i64 {
    page.max(1)
}

pub async fn create_restaurant(
    pool: &SqlitePool,
    owner: &CurrentUser,
    input: RestaurantCreate,
) -> ServiceResult<Restaurant> {
    input.validate()?;
    let cat = category::get_or_create(pool, &input.category_name).await?;
    let created = restaurant::create(pool, owner.id, cat.id, &input).await?;
    tracing::info!(
        restaurant_id = created.id,
        owner_id = owner.id,
        category = %cat.slug,
        "restaurant created"
    );
    Ok(created)
}

pub async fn edit_restaurant(
    pool: &SqlitePool,
    owner: &CurrentUser,
    restaurant_id: i64,
    input: RestaurantUpdate,
) -> ServiceResult<Restaurant> {
    input.validate()?;
    let existing = restaurant::find_by_id(pool, restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))?;
    ensure_owner(owner, existing.owner_id)?;
    let category_id = match &input.category_name {
        Some(name) => Some(category::get_or_create(pool, name).await?.id),
        None => None,
    };
    Ok(restaurant::update(pool, restaurant_id, category_id, &input).await?)
}

/// Delete-request: clears the verified flag and keeps the row. Restaurants
/// are immortal once created; their order history must stay resolvable.
pub async fn delete_restaurant(
    pool: &SqlitePool,
    owner: &CurrentUser,
    restaurant_id: i64,
) -> ServiceResult<()> {
    let existing = restaurant::find_by_id(pool, restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))?;
    ensure_owner(owner, existing.owner_id)?;
    restaurant::unverify(pool, restaurant_id).await?;
    tracing::info!(restaurant_id, owner_id = owner.id, "restaurant unverified");
    Ok(())
}

pub async fn restaurant_by_id(pool: &SqlitePool, restaurant_id: i64) -> ServiceResult<Restaurant> {
    restaurant::find_by_id(pool, restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))
}

pub async fn my_restaurants(
    pool: &SqlitePool,
    owner: &CurrentUser,
) -> ServiceResult<Vec<Restaurant>> {
    Ok(restaurant::find_by_owner(pool, owner.id).await?)
}

pub async fn all_restaurants(pool: &SqlitePool, page: i64) -> ServiceResult<RestaurantPage> {
    let page = clamp_page(page);
    let (restaurants, total_results) =
        restaurant::find_page(pool, page, RESTAURANTS_PAGE_SIZE).await?;
    Ok(RestaurantPage {
        restaurants,
        total_pages: total_pages(total_results, RESTAURANTS_PAGE_SIZE),
        total_results,
    })
}

pub async fn find_category_by_slug(
    pool: &SqlitePool,
    slug: &str,
    page: i64,
) -> ServiceResult<CategoryPage> {
    let page = clamp_page(page);
    let cat = category::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Category not found".into()))?;
    let restaurants =
        restaurant::find_by_category_page(pool, cat.id, page, CATEGORY_PAGE_SIZE).await?;
    let total_results = category::count_restaurants(pool, cat.id).await?;
    Ok(CategoryPage {
        restaurants,
        total_pages: total_pages(total_results, CATEGORY_PAGE_SIZE),
        total_results,
        category: cat,
    })
}

pub async fn search_restaurant_by_name(
    pool: &SqlitePool,
    query: &str,
    page: i64,
) -> ServiceResult<RestaurantPage> {
    let page = clamp_page(page);
    let (restaurants, total_results) =
        restaurant::search_by_name(pool, query, page, SEARCH_PAGE_SIZE).await?;
    Ok(RestaurantPage {
        restaurants,
        total_pages: total_pages(total_results, SEARCH_PAGE_SIZE),
        total_results,
    })
}

pub async fn create_dish(
    pool: &SqlitePool,
    owner: &CurrentUser,
    input: DishCreate,
) -> ServiceResult<Dish> {
    input.validate()?;
    let rest = restaurant::find_by_id(pool, input.restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))?;
    ensure_owner(owner, rest.owner_id)?;
    Ok(dish::create(pool, &input).await?)
}

pub async fn edit_dish(
    pool: &SqlitePool,
    owner: &CurrentUser,
    dish_id: i64,
    input: DishUpdate,
) -> ServiceResult<Dish> {
    input.validate()?;
    let existing = dish::find_by_id(pool, dish_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Dish not found".into()))?;
    let rest = restaurant::find_by_id(pool, existing.restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))?;
    ensure_owner(owner, rest.owner_id)?;
    Ok(dish::update(pool, dish_id, &input).await?)
}

pub async fn delete_dish(
    pool: &SqlitePool,
    owner: &CurrentUser,
    dish_id: i64,
) -> ServiceResult<()> {
    let existing = dish::find_by_id(pool, dish_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Dish not found".into()))?;
    let rest = restaurant::find_by_id(pool, existing.restaurant_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Restaurant not found".into()))?;
    ensure_owner(owner, rest.owner_id)?;
    dish::delete(pool, dish_id).await?;
    Ok(())
}
