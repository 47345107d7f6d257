use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::models::bot::{Bot, BotPatch, NewBot};
use crate::server::AppState;
use crate::validation::{self, bot_body_rules, bot_replace_rules};

// A missing or non-JSON body validates like an empty object, so field rules
// still produce their per-field errors instead of a bare 400.
fn json_body(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value).unwrap_or_else(|| json!({}))
}

/// GET /api/bots - list every bot, newest id first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Bot>> {
    let bots = state.store.find_all().await?;
    Ok(ApiResponse::success(bots))
}

/// GET /api/bots/:id - fetch a single bot.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Bot> {
    let id = validation::parse_id(&id)?;
    let bot = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::bot_not_found)?;
    Ok(ApiResponse::success(bot))
}

/// POST /api/bots - create a bot. New records are always available.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ApiResult<Bot> {
    let body = json_body(body);
    bot_body_rules().check(&body)?;

    let bot = state.store.create(NewBot::from_body(&body)).await?;
    Ok(ApiResponse::created(bot))
}

/// PUT /api/bots/:id - replace the validated fields; any other recognized
/// fields present in the body are applied as well.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> ApiResult<Bot> {
    // An invalid id short-circuits before body validation runs.
    let id = validation::parse_id(&id)?;
    let body = json_body(body);
    bot_replace_rules().check(&body)?;

    let bot = state.store.update(id, BotPatch::from_body(&body)).await?;
    Ok(ApiResponse::success(bot))
}

/// PATCH /api/bots/:id - flip availability. Not idempotent: two successive
/// calls restore the original value.
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Bot> {
    let id = validation::parse_id(&id)?;
    let current = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::bot_not_found)?;

    let bot = state
        .store
        .update(id, BotPatch::availability(!current.availability))
        .await?;
    Ok(ApiResponse::success(bot))
}

/// DELETE /api/bots/:id - hard removal, confirmed with a literal string.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<&'static str> {
    let id = validation::parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(ApiResponse::success("Bot Eliminado"))
}
