//! Dish resolvers

use async_graphql::{Context, InputObject, Object, SimpleObject};
use sqlx::SqlitePool;

use super::current_user_with_role;
use super::outputs::{ErrorKind, failure_fields};
use super::types::{DishOptionInput, GqlDish};
use crate::services::restaurant_service;
use shared::models::{DishCreate, DishUpdate, UserRole};

#[derive(InputObject)]
pub struct CreateDishInput {
    pub restaurant_id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub photo: Option<String>,
    pub description: String,
    #[graphql(default)]
    pub options: Vec<DishOptionInput>,
}

#[derive(InputObject)]
pub struct EditDishInput {
    pub dish_id: i64,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<DishOptionInput>>,
}

#[derive(InputObject)]
pub struct DeleteDishInput {
    pub dish_id: i64,
}

#[derive(SimpleObject)]
pub struct CreateDishOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub dish: Option<GqlDish>,
}

#[derive(SimpleObject)]
pub struct EditDishOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub dish: Option<GqlDish>,
}

#[derive(SimpleObject)]
pub struct DeleteDishOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
}

#[derive(Default)]
pub struct DishMutation;

#[Object]
impl DishMutation {
    async fn create_dish(&self, ctx: &Context<'_>, input: CreateDishInput) -> CreateDishOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return CreateDishOutput { ok: false, error, message, dish: None };
            }
        };
        let payload = DishCreate {
            restaurant_id: input.restaurant_id,
            name: input.name,
            price: input.price,
            photo: input.photo,
            description: input.description,
            options: input.options.into_iter().map(Into::into).collect(),
        };
        match restaurant_service::create_dish(pool, owner, payload).await {
            Ok(created) => CreateDishOutput {
                ok: true,
                error: None,
                message: None,
                dish: Some(created.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                CreateDishOutput { ok: false, error, message, dish: None }
            }
        }
    }

    async fn edit_dish(&self, ctx: &Context<'_>, input: EditDishInput) -> EditDishOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return EditDishOutput { ok: false, error, message, dish: None };
            }
        };
        let payload = DishUpdate {
            name: input.name,
            price: input.price,
            photo: input.photo,
            description: input.description,
            options: input
                .options
                .map(|options| options.into_iter().map(Into::into).collect()),
        };
        match restaurant_service::edit_dish(pool, owner, input.dish_id, payload).await {
            Ok(updated) => EditDishOutput {
                ok: true,
                error: None,
                message: None,
                dish: Some(updated.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                EditDishOutput { ok: false, error, message, dish: None }
            }
        }
    }

    async fn delete_dish(&self, ctx: &Context<'_>, input: DeleteDishInput) -> DeleteDishOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let owner = match current_user_with_role(ctx, UserRole::Owner) {
            Ok(owner) => owner,
            Err(e) => {
                let (error, message) = failure_fields(&e);
                return DeleteDishOutput { ok: false, error, message };
            }
        };
        match restaurant_service::delete_dish(pool, owner, input.dish_id).await {
            Ok(()) => DeleteDishOutput { ok: true, error: None, message: None },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                DeleteDishOutput { ok: false, error, message }
            }
        }
    }
}
