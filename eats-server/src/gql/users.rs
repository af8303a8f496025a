//! Account resolvers

use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, Result, SimpleObject};
use sqlx::SqlitePool;

use super::current_user;
use super::outputs::{ErrorKind, failure_fields};
use super::types::{GqlUser, GqlUserRole};
use crate::auth::JwtService;
use crate::db::repository::user;
use crate::services::user_service;
use shared::models::UserCreate;

#[derive(InputObject)]
pub struct CreateAccountInput {
    pub email: String,
    pub password: String,
    pub role: GqlUserRole,
}

#[derive(InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(SimpleObject)]
pub struct CreateAccountOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub user: Option<GqlUser>,
}

#[derive(SimpleObject)]
pub struct LoginOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The authenticated account, from the decoded token in request context.
    async fn me(&self, ctx: &Context<'_>) -> Result<GqlUser> {
        let actor = current_user(ctx).map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let pool = ctx.data_unchecked::<SqlitePool>();
        let found = user::find_by_id(pool, actor.id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?
            .ok_or_else(|| async_graphql::Error::new("User not found"))?;
        Ok(found.into())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_account(
        &self,
        ctx: &Context<'_>,
        input: CreateAccountInput,
    ) -> CreateAccountOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let payload = UserCreate {
            email: input.email,
            password: input.password,
            role: input.role.into(),
        };
        match user_service::create_account(pool, payload).await {
            Ok(created) => CreateAccountOutput {
                ok: true,
                error: None,
                message: None,
                user: Some(created.into()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                CreateAccountOutput { ok: false, error, message, user: None }
            }
        }
    }

    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> LoginOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let jwt = ctx.data_unchecked::<Arc<JwtService>>();
        match user_service::login(pool, jwt, &input.email, &input.password).await {
            Ok((token, _)) => LoginOutput {
                ok: true,
                error: None,
                message: None,
                token: Some(token),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                LoginOutput { ok: false, error, message, token: None }
            }
        }
    }
}
