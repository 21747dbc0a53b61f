use utility_bill_api::{config, database, handlers, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and
    // ACCESS_TOKEN_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        "Starting utility-bill API in {:?} mode",
        config.environment
    );

    // One pool for the process lifetime, injected into handlers through
    // AppState. Without DATABASE_URL the server still boots, serving from
    // the in-memory store.
    let state = match database::connect(&config.database).await {
        Ok(pool) => AppState::postgres(pool, config.security.clone()),
        Err(e) => {
            tracing::warn!("No database backend ({}); using in-memory store", e);
            AppState::in_memory(config.security.clone())
        }
    };

    let app = handlers::router(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Utility Bill Management Server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
