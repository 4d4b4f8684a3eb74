use schoolpro_config::{CorsConfig, JwtConfig};
use schoolpro_db::{PgPool, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Builds state around an existing pool. Integration tests use this with
    /// the pool handed out by `#[sqlx::test]`.
    pub fn with_pool(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> AppState {
    AppState::with_pool(init_db_pool().await)
}
