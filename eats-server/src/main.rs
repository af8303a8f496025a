use eats_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment + logging
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("eats-server starting...");

    // Load configuration
    let config = Config::from_env();

    // Initialize server state (database, JWT, schema)
    let state = ServerState::initialize(&config).await?;

    // Serve
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
