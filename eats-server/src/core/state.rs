use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::gql::{self, AppSchema};

/// Server state — shared handles passed to every request
///
/// Clones are shallow: the pool and schema are internally reference-counted,
/// the JWT service sits behind an Arc.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub schema: AppSchema,
}

impl ServerState {
    /// Open the database, apply migrations, and assemble the schema.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let db = DbService::new(&config.db_path()).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let schema = gql::build_schema(db.pool.clone(), jwt_service.clone());
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            jwt_service,
            schema,
        })
    }
}
