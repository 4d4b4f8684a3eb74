use dotenvy::dotenv;
use schoolpro::logging::init_tracing;
use schoolpro::router::init_router;
use schoolpro::state::init_app_state;
use schoolpro_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _log_guard = init_tracing();

    let state = init_app_state().await;

    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        error!(error = %e, "Failed to run database migrations");
        std::process::exit(1);
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let app = init_router(state);

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(address = %address, "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
    }
}
