//! Category resolvers

use async_graphql::{Context, Object, SimpleObject};
use sqlx::SqlitePool;

use super::outputs::{ErrorKind, failure_fields};
use super::types::{GqlCategory, GqlRestaurant};
use crate::db::repository::category;
use crate::services::{ServiceError, restaurant_service};

#[derive(SimpleObject)]
pub struct AllCategoriesOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub categories: Option<Vec<GqlCategory>>,
}

#[derive(SimpleObject)]
pub struct CategoryOutput {
    pub ok: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub category: Option<GqlCategory>,
    pub restaurants: Option<Vec<GqlRestaurant>>,
    pub total_pages: Option<i64>,
    pub total_results: Option<i64>,
}

#[derive(Default)]
pub struct CategoryQuery;

#[Object]
impl CategoryQuery {
    /// Every category; each exposes its computed restaurantCount.
    async fn all_categories(&self, ctx: &Context<'_>) -> AllCategoriesOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        match category::find_all(pool).await {
            Ok(categories) => AllCategoriesOutput {
                ok: true,
                error: None,
                message: None,
                categories: Some(categories.into_iter().map(Into::into).collect()),
            },
            Err(e) => {
                let (error, message) = failure_fields(&ServiceError::from(e));
                AllCategoriesOutput { ok: false, error, message, categories: None }
            }
        }
    }

    /// Category drill-down by slug, with one page of its restaurants.
    async fn category(
        &self,
        ctx: &Context<'_>,
        slug: String,
        #[graphql(default = 1)] page: i64,
    ) -> CategoryOutput {
        let pool = ctx.data_unchecked::<SqlitePool>();
        match restaurant_service::find_category_by_slug(pool, &slug, page).await {
            Ok(result) => CategoryOutput {
                ok: true,
                error: None,
                message: None,
                category: Some(result.category.into()),
                restaurants: Some(result.restaurants.into_iter().map(Into::into).collect()),
                total_pages: Some(result.total_pages),
                total_results: Some(result.total_results),
            },
            Err(e) => {
                let (error, message) = failure_fields(&e);
                CategoryOutput {
                    ok: false,
                    error,
                    message,
                    category: None,
                    restaurants: None,
                    total_pages: None,
                    total_results: None,
                }
            }
        }
    }
}
