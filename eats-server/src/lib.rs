//! Eats Server - restaurant-ordering platform backend
//!
//! # Module structure
//!
//! ```text
//! eats-server/src/
//! ├── core/       # configuration, state, server bootstrap
//! ├── auth/       # JWT service + identity-attaching middleware
//! ├── db/         # SQLite pool, migrations, repositories
//! ├── services/   # business orchestration (restaurants, accounts)
//! ├── gql/        # GraphQL schema, resolvers, exposure types
//! ├── api/        # plain HTTP routes (health)
//! └── utils/      # logging
//! ```
//!
//! Control flow per request: the auth middleware attaches the decoded token
//! identity (when present) → a resolver pulls arguments and identity from
//! context → one service call → one or more repository operations → a
//! result-shaped output back to the client.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod gql;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{init_logger, init_logger_with_file};
