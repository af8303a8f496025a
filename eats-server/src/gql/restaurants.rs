//! Restaurant resolvers
//!
//! Thin: each resolver forwards its arguments to one service call and wraps
//! the result. Owner-only mutations check the role before calling through.

use async_graphql::{Context, InputObject, Object, SimpleObject};
use sqlx::SqlitePool;

use super::current_user_with_role;
use super::outputs::{ErrorKind, failure_fields};
use super::types::GqlRestaurant;
use crate::services::{ServiceError, restaurant_service};
use shared::models::{RestaurantCreate, RestaurantUpdate, UserRole};

#[derive(InputObject)]
pub struct CreateRestaurantInput {
    pub name: String,
    pub address: Option<String>,
    pub avatar: Option<String>,
    /// Free-text category name; resolved (or created) on the fly
    pub category_name: String,
}

#[derive(InputObject)]
pub struct EditRestaurantInput {
    pub restaurant_id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub category_name: Option<String>,
}

#[derive(InputObject)]
pub struct DeleteRestaurantInput {
    pub restaurant_id: i64,
}

#[derive(SimpleObject)]
pub struct CreateRestaurantOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub restaurant: Option<GqlRestaurant>,
}

#[derive(SimpleObject)]
pub struct EditRestaurantOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub restaurant: Option<GqlRestaurant>,
}

#[derive(SimpleObject)]
pub struct DeleteRestaurantOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
}

#[derive(SimpleObject)]
pub struct RestaurantOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub restaurant: Option<GqlRestaurant>,
}

#[derive(SimpleObject)]
pub struct RestaurantsPageOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub results: Option<Vec<GqlRestaurant>>,
    pub total_pages: Option<i64>,
    pub total_results: Option<i64>,
}

#[derive(SimpleObject)]
pub struct MyRestaurantsOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub restaurants: Option<Vec<GqlRestaurant>>,
}

impl RestaurantsPageOutput {
    fn from_result(res: Result<restaurant_service::RestaurantPage, ServiceError>) -> Self {
        match res {
            Ok(page) => Self {
                ok: true,
                error: None,
                message: None,
                results: Some(page.restaurants.into_iter().map(Into::into).collect()),
                total_pages: Some(page.total_pages),
                total_results: Some(page.total_results),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                Self {
                    ok: false,
                    error,
                    message,
                    results: None,
                    total_pages: None,
                    total_results: None,
                }
            }
        }
    }
}

#[derive(Default)]
pub struct RestaurantQuery;

#[Object]
impl RestaurantQuery {
    /// Public feed of all restaurants, three per page.
    async fn restaurants(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i64,
    ) -> RestaurantsPageOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        RestaurantsPageOutput::from_result(restaurant_service::all_restaurants(pool, page).await)
    }

    async fn restaurant(&self, ctx: &Context<'_>, restaurant_id: i64) -> RestaurantOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        match restaurant_service::restaurant_by_id(pool, restaurant_id).await {
            Ok(found) => RestaurantOutput {
                ok: true,
                error: None,
                message: None,
                restaurant: Some(found.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                RestaurantOutput { ok: false, error, message, restaurant: None }
            }
        }
    }

    /// Case-insensitive substring search on restaurant name.
    async fn search_restaurant(
        &self,
        ctx: &Context<'_>,
        query: String,
        #[graphql(default = 1)] page: i64,
    ) -> RestaurantsPageOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        RestaurantsPageOutput::from_result(
            restaurant_service::search_restaurant_by_name(pool, &query, page).await,
        )
    }

    /// Restaurants owned by the authenticated account.
    async fn my_restaurants(&self, ctx: &Context<'_>) -> MyRestaurantsOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return MyRestaurantsOutput { ok: false, error, message, restaurants: None };
            }
        };
        match restaurant_service::my_restaurants(pool, owner).await {
            Ok(restaurants) => MyRestaurantsOutput {
                ok: true,
                error: None,
                message: None,
                restaurants: Some(restaurants.into_iter().map(Into::into).collect()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                MyRestaurantsOutput { ok: false, error, message, restaurants: None }
            }
        }
    }
}

#[derive(Default)]
pub struct RestaurantMutation;

#[Object]
impl RestaurantMutation {
    async fn create_restaurant(
        &self,
        ctx: &Context<'_>,
        input: CreateRestaurantInput,
    ) -> CreateRestaurantOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return CreateRestaurantOutput { ok: false, error, message, restaurant: None };
            }
        };
        let payload = RestaurantCreate {
            name: input.name,
            address: input.address,
            avatar: input.avatar,
            category_name: input.category_name,
        };
        match restaurant_service::create_restaurant(pool, owner, payload).await {
            Ok(created) => CreateRestaurantOutput {
                ok: true,
                error: None,
                message: None,
                restaurant: Some(created.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                CreateRestaurantOutput { ok: false, error, message, restaurant: None }
            }
        }
    }

    async fn edit_restaurant(
        &self,
        ctx: &Context<'_>,
        input: EditRestaurantInput,
    ) -> EditRestaurantOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return EditRestaurantOutput { ok: false, error, message, restaurant: None };
            }
        };
        let payload = RestaurantUpdate {
            name: input.name,
            address: input.address,
            avatar: input.avatar,
            category_name: input.category_name,
        };
        match restaurant_service::edit_restaurant(pool, owner, input.restaurant_id, payload).await {
            Ok(updated) => EditRestaurantOutput {
                ok: true,
                error: None,
                message: None,
                restaurant: Some(updated.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                EditRestaurantOutput { ok: false, error, message, restaurant: None }
            }
        }
    }

    async fn delete_restaurant(
        &self,
        ctx: &Context<'_>,
        input: DeleteRestaurantInput,
    ) -> DeleteRestaurantOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return DeleteRestaurantOutput { ok: false, error, message };
            }
        };
        match restaurant_service::delete_restaurant(pool, owner, input.restaurant_id).await {
            Ok(()) => DeleteRestaurantOutput { ok: true, error: None, message: None },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                DeleteRestaurantOutput { ok: false, error, message }
            }
        }
    }
}
