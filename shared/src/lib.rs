//! Shared types for the eats platform
//!
//! Entity models and small utilities used by the API server. Models are plain
//! serde structs; `sqlx::FromRow` derives are gated behind the `db` feature so
//! non-database consumers stay light.

pub mod models;
pub mod util;
