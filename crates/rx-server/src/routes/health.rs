use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "ok",
        "name": state.config.output_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
