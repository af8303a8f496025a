//! GraphQL API
//!
//! Schema assembly and the axum mount. Resolvers map 1:1 onto service
//! operations; mutation and paginated-query outputs are result shapes
//! carrying `ok` plus a structured error kind.

pub mod categories;
pub mod dishes;
pub mod outputs;
pub mod restaurants;
pub mod types;
pub mod users;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Router};
use sqlx::SqlitePool;

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::services::ServiceError;
use shared::models::UserRole;

use categories::CategoryQuery;
use dishes::DishMutation;
use restaurants::{RestaurantMutation, RestaurantQuery};
use users::{UserMutation, UserQuery};

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery, CategoryQuery, RestaurantQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, RestaurantMutation, DishMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with its shared context data.
pub fn build_schema(pool: SqlitePool, jwt_service: Arc<JwtService>) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(pool)
        .data(jwt_service)
        .finish()
}

/// The authenticated identity from request context, or `Unauthorized`.
pub(crate) fn current_user<'a>(ctx: &'a Context<'_>) -> Result<&'a CurrentUser, ServiceError> {
    ctx.data_opt::<CurrentUser>().ok_or(ServiceError::Unauthorized)
}

/// The authenticated identity, restricted to one role.
pub(crate) fn current_user_with_role<'a>(
    ctx: &'a Context<'_>,
    role: UserRole,
) -> Result<&'a CurrentUser, ServiceError> {
    let user = current_user(ctx)?;
    if user.role != role {
        return Err(ServiceError::Forbidden("your role cannot perform this action"));
    }
    Ok(user)
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Execute a GraphQL request, forwarding the identity the auth middleware
/// attached (if any) into the schema context.
async fn graphql_handler(
    State(state): State<ServerState>,
    user: Option<Extension<CurrentUser>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(Extension(user)) = user {
        request = request.data(user);
    }
    state.schema.execute(request).await.into()
}
