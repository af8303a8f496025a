//! End-to-end GraphQL tests
//!
//! Drive the schema the way the HTTP layer does: each request optionally
//! carries a decoded identity in its context data, and resolvers enforce
//! authentication and roles themselves.

use std::sync::Arc;

use async_graphql::Request;
use eats_server::auth::{CurrentUser, JwtConfig, JwtService};
use eats_server::gql::{AppSchema, build_schema};
use serde_json::Value;
use shared::models::UserRole;
use sqlx::sqlite::SqlitePoolOptions;

async fn test_schema() -> AppSchema {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let jwt = Arc::new(JwtService::with_config(JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".into(),
        expiration_minutes: 60,
        issuer: "eats-server".into(),
        audience: "eats-clients".into(),
    }));
    build_schema(pool, jwt)
}

/// Execute a query and return its data as JSON, failing on GraphQL errors.
async fn execute(schema: &AppSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Register an owner account and return its identity.
async fn register_owner(schema: &AppSchema, email: &str) -> CurrentUser {
    let mutation = format!(
        r#"mutation {{
            createAccount(input: {{email: "{email}", password: "hunter2hunter2", role: OWNER}}) {{
                ok
                error
                user {{ id }}
            }}
        }}"#
    );
    let data = execute(schema, mutation.as_str()).await;
    assert_eq!(data["createAccount"]["ok"], Value::Bool(true));
    CurrentUser {
        id: data["createAccount"]["user"]["id"].as_i64().unwrap(),
        email: email.to_string(),
        role: UserRole::Owner,
    }
}

async fn create_restaurant(
    schema: &AppSchema,
    owner: &CurrentUser,
    name: &str,
    category: &str,
) -> i64 {
    let mutation = format!(
        r#"mutation {{
            createRestaurant(input: {{name: "{name}", categoryName: "{category}"}}) {{
                ok
                error
                restaurant {{ id isVerified }}
            }}
        }}"#
    );
    let data = execute(schema, Request::new(mutation).data(owner.clone())).await;
    assert_eq!(data["createRestaurant"]["ok"], Value::Bool(true));
    data["createRestaurant"]["restaurant"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn account_creation_and_login_flow() {
    let schema = test_schema().await;
    register_owner(&schema, "alice@eats.test").await;

    // Duplicate registration is a structured conflict, not a GraphQL error
    let duplicate = execute(
        &schema,
        r#"mutation {
            createAccount(input: {email: "alice@eats.test", password: "hunter2hunter2", role: OWNER}) {
                ok
                error
            }
        }"#,
    )
    .await;
    assert_eq!(duplicate["createAccount"]["ok"], Value::Bool(false));
    assert_eq!(duplicate["createAccount"]["error"], "CONFLICT");

    let login = execute(
        &schema,
        r#"mutation {
            login(input: {email: "alice@eats.test", password: "hunter2hunter2"}) {
                ok
                token
            }
        }"#,
    )
    .await;
    assert_eq!(login["login"]["ok"], Value::Bool(true));
    assert!(login["login"]["token"].as_str().is_some_and(|t| !t.is_empty()));

    let bad_login = execute(
        &schema,
        r#"mutation {
            login(input: {email: "alice@eats.test", password: "wrong-password"}) {
                ok
                error
                token
            }
        }"#,
    )
    .await;
    assert_eq!(bad_login["login"]["ok"], Value::Bool(false));
    assert_eq!(bad_login["login"]["error"], "VALIDATION");
    assert!(bad_login["login"]["token"].is_null());
}

#[tokio::test]
async fn restaurant_mutations_enforce_identity_and_role() {
    let schema = test_schema().await;

    let mutation = r#"mutation {
        createRestaurant(input: {name: "Pizza Palace", categoryName: "Fast Food"}) {
            ok
            error
        }
    }"#;

    // Anonymous request
    let anonymous = execute(&schema, mutation).await;
    assert_eq!(anonymous["createRestaurant"]["ok"], Value::Bool(false));
    assert_eq!(anonymous["createRestaurant"]["error"], "UNAUTHORIZED");

    // Authenticated, wrong role
    let client = CurrentUser {
        id: 7,
        email: "client@eats.test".into(),
        role: UserRole::Client,
    };
    let wrong_role = execute(&schema, Request::new(mutation).data(client)).await;
    assert_eq!(wrong_role["createRestaurant"]["ok"], Value::Bool(false));
    assert_eq!(wrong_role["createRestaurant"]["error"], "FORBIDDEN");

    // Owner role succeeds
    let owner = register_owner(&schema, "alice@eats.test").await;
    create_restaurant(&schema, &owner, "Pizza Palace", "Fast Food").await;
}

#[tokio::test]
async fn catalog_queries_paginate_and_search() {
    let schema = test_schema().await;
    let owner = register_owner(&schema, "alice@eats.test").await;
    for i in 1..=7 {
        create_restaurant(&schema, &owner, &format!("Diner No {i}"), "Fast Food").await;
    }

    let page2 = execute(
        &schema,
        r#"{ restaurants(page: 2) { ok totalPages totalResults results { name } } }"#,
    )
    .await;
    assert_eq!(page2["restaurants"]["ok"], Value::Bool(true));
    assert_eq!(page2["restaurants"]["totalResults"], 7);
    assert_eq!(page2["restaurants"]["totalPages"], 3);
    assert_eq!(page2["restaurants"]["results"].as_array().unwrap().len(), 3);

    // Case-insensitive substring search
    let search = execute(
        &schema,
        r#"{ searchRestaurant(query: "diner no 7") { ok totalResults results { name } } }"#,
    )
    .await;
    assert_eq!(search["searchRestaurant"]["totalResults"], 1);
    assert_eq!(
        search["searchRestaurant"]["results"][0]["name"],
        "Diner No 7"
    );

    // Category drill-down reports a page count, and the computed counter
    let category = execute(
        &schema,
        r#"{ category(slug: "fast-food") {
            ok
            totalPages
            totalResults
            category { name restaurantCount }
        } }"#,
    )
    .await;
    assert_eq!(category["category"]["ok"], Value::Bool(true));
    assert_eq!(category["category"]["totalResults"], 7);
    assert_eq!(category["category"]["totalPages"], 1);
    assert_eq!(category["category"]["category"]["restaurantCount"], 7);

    let missing = execute(
        &schema,
        r#"{ category(slug: "no-such") { ok error } }"#,
    )
    .await;
    assert_eq!(missing["category"]["ok"], Value::Bool(false));
    assert_eq!(missing["category"]["error"], "NOT_FOUND");
}

#[tokio::test]
async fn deleted_restaurant_remains_retrievable_unverified() {
    let schema = test_schema().await;
    let owner = register_owner(&schema, "alice@eats.test").await;
    let id = create_restaurant(&schema, &owner, "Pizza Palace", "Fast Food").await;

    let delete = format!(
        r#"mutation {{ deleteRestaurant(input: {{restaurantId: {id}}}) {{ ok error }} }}"#
    );
    let deleted = execute(&schema, Request::new(delete).data(owner.clone())).await;
    assert_eq!(deleted["deleteRestaurant"]["ok"], Value::Bool(true));
    assert!(deleted["deleteRestaurant"]["error"].is_null());

    let lookup = format!(
        r#"{{ restaurant(restaurantId: {id}) {{ ok restaurant {{ name isVerified }} }} }}"#
    );
    let found = execute(&schema, lookup.as_str()).await;
    assert_eq!(found["restaurant"]["ok"], Value::Bool(true));
    assert_eq!(found["restaurant"]["restaurant"]["name"], "Pizza Palace");
    assert_eq!(
        found["restaurant"]["restaurant"]["isVerified"],
        Value::Bool(false)
    );
}

#[tokio::test]
async fn dishes_ride_along_with_their_restaurant() {
    let schema = test_schema().await;
    let owner = register_owner(&schema, "alice@eats.test").await;
    let id = create_restaurant(&schema, &owner, "Pizza Palace", "Fast Food").await;

    let create_dish = format!(
        r#"mutation {{
            createDish(input: {{
                restaurantId: {id},
                name: "Margherita",
                price: 1250,
                description: "Tomato, mozzarella, basil",
                options: [{{name: "Size", choices: [{{name: "L", extra: 300}}]}}]
            }}) {{
                ok
                error
                dish {{ name price }}
            }}
        }}"#
    );
    let created = execute(&schema, Request::new(create_dish).data(owner.clone())).await;
    assert_eq!(created["createDish"]["ok"], Value::Bool(true));
    assert_eq!(created["createDish"]["dish"]["price"], 1250);

    let search = execute(
        &schema,
        r#"{ searchRestaurant(query: "piz") {
            ok
            results { name dishes { name price options { name choices { name extra } } } }
        } }"#,
    )
    .await;
    let dishes = &search["searchRestaurant"]["results"][0]["dishes"];
    assert_eq!(dishes[0]["name"], "Margherita");
    assert_eq!(dishes[0]["options"][0]["choices"][0]["extra"], 300);
}
