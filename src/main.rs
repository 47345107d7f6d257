use std::sync::Arc;

use bot_catalog_api::config;
use bot_catalog_api::server::{app, AppState};
use bot_catalog_api::store::{BotStore, MemoryBotStore, PgBotStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and PORT.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();

    let store: Arc<dyn BotStore> = match &config.database_url {
        Some(url) => {
            let store = PgBotStore::connect(url)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));
            store
                .ensure_schema()
                .await
                .unwrap_or_else(|e| panic!("failed to prepare schema: {}", e));
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store");
            Arc::new(MemoryBotStore::new())
        }
    };

    let app = app(AppState::new(store));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("REST API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
