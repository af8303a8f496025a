//! API exposure types
//!
//! GraphQL-facing views of the entity models, kept separate from the models
//! themselves (the models describe storage; these describe what the API
//! shows). Relation fields resolve on demand from the pool in request
//! context.

use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject};
use sqlx::SqlitePool;

use crate::db::repository::{category, dish, user};
use shared::models;

fn db_err(e: crate::db::repository::RepoError) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

/// Account role
#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "UserRole")]
pub enum GqlUserRole {
    Client,
    Owner,
    Delivery,
}

impl From<models::UserRole> for GqlUserRole {
    fn from(role: models::UserRole) -> Self {
        match role {
            models::UserRole::Client => GqlUserRole::Client,
            models::UserRole::Owner => GqlUserRole::Owner,
            models::UserRole::Delivery => GqlUserRole::Delivery,
        }
    }
}

impl From<GqlUserRole> for models::UserRole {
    fn from(role: GqlUserRole) -> Self {
        match role {
            GqlUserRole::Client => models::UserRole::Client,
            GqlUserRole::Owner => models::UserRole::Owner,
            GqlUserRole::Delivery => models::UserRole::Delivery,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "User")]
pub struct GqlUser {
    pub id: i64,
    pub email: String,
    pub role: GqlUserRole,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<models::User> for GqlUser {
    fn from(u: models::User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            role: u.role.into(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Category", complex)]
pub struct GqlCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[ComplexObject]
impl GqlCategory {
    /// Number of restaurants filed under this category. Computed on demand,
    /// never stored.
    async fn restaurant_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        category::count_restaurants(pool, self.id).await.map_err(db_err)
    }
}

impl From<models::Category> for GqlCategory {
    fn from(c: models::Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            cover_image: c.cover_image,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Restaurant", complex)]
pub struct GqlRestaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub avatar: String,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: i64,
    #[graphql(skip)]
    pub category_id: Option<i64>,
    #[graphql(skip)]
    pub owner_id: i64,
}

#[ComplexObject]
impl GqlRestaurant {
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<GqlCategory>> {
        let Some(category_id) = self.category_id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<SqlitePool>();
        let found = category::find_by_id(pool, category_id).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<GqlUser>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let found = user::find_by_id(pool, self.owner_id).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn dishes(&self, ctx: &Context<'_>) -> Result<Vec<GqlDish>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let dishes = dish::find_by_restaurant(pool, self.id).await.map_err(db_err)?;
        Ok(dishes.into_iter().map(Into::into).collect())
    }
}

impl From<models::Restaurant> for GqlRestaurant {
    fn from(r: models::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
            avatar: r.avatar,
            is_verified: r.is_verified,
            created_at: r.created_at,
            updated_at: r.updated_at,
            category_id: r.category_id,
            owner_id: r.owner_id,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "DishOptionChoice")]
pub struct GqlDishOptionChoice {
    pub name: String,
    /// Price delta in cents
    pub extra: i64,
}

#[derive(SimpleObject)]
#[graphql(name = "DishOption")]
pub struct GqlDishOption {
    pub name: String,
    pub extra: i64,
    pub choices: Vec<GqlDishOptionChoice>,
}

#[derive(SimpleObject)]
#[graphql(name = "Dish")]
pub struct GqlDish {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub photo: Option<String>,
    pub description: String,
    pub options: Vec<GqlDishOption>,
    pub restaurant_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<models::DishOptionChoice> for GqlDishOptionChoice {
    fn from(c: models::DishOptionChoice) -> Self {
        Self { name: c.name, extra: c.extra }
    }
}

impl From<models::DishOption> for GqlDishOption {
    fn from(o: models::DishOption) -> Self {
        Self {
            name: o.name,
            extra: o.extra,
            choices: o.choices.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<models::Dish> for GqlDish {
    fn from(d: models::Dish) -> Self {
        Self {
            id: d.id,
            name: d.name,
            price: d.price,
            photo: d.photo,
            description: d.description,
            options: d.options.into_iter().map(Into::into).collect(),
            restaurant_id: d.restaurant_id,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(InputObject, Clone)]
pub struct DishChoiceInput {
    pub name: String,
    #[graphql(default)]
    pub extra: i64,
}

#[derive(InputObject, Clone)]
pub struct DishOptionInput {
    pub name: String,
    #[graphql(default)]
    pub extra: i64,
    #[graphql(default)]
    pub choices: Vec<DishChoiceInput>,
}

impl From<DishChoiceInput> for models::DishOptionChoice {
    fn from(c: DishChoiceInput) -> Self {
        Self { name: c.name, extra: c.extra }
    }
}

impl From<DishOptionInput> for models::DishOption {
    fn from(o: DishOptionInput) -> Self {
        Self {
            name: o.name,
            extra: o.extra,
            choices: o.choices.into_iter().map(Into::into).collect(),
        }
    }
}
