use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::bots;
use crate::store::BotStore;

/// Shared router state: the persistence collaborator behind the handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BotStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BotStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(bot_routes())
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn bot_routes() -> Router<AppState> {
    Router::new()
        .route("/api/bots", get(bots::list).post(bots::create))
        .route(
            "/api/bots/:id",
            get(bots::get_by_id)
                .put(bots::replace)
                .patch(bots::toggle_availability)
                .delete(bots::remove),
        )
}

async fn health() -> Json<Value> {
    Json(json!({
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}
