//! Mock authority endpoints

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/users/me", get(me))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.authenticate(&req.username, &req.password) {
        Some(token) => {
            tracing::info!(username = %req.username, "Mock login successful");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "token": token,
                    "user": { "username": req.username }
                })),
            )
        }
        None => {
            tracing::warn!(username = %req.username, "Mock login rejected");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "success": false,
                    "error": "Invalid credentials"
                })),
            )
        }
    }
}

async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<serde_json::Value>) {
    let token = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or("");

    match state.user_for_token(token) {
        Some(user) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "username": user.username,
                "nombreCompleto": user.full_name
            })),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "success": false,
                "error": "Missing or invalid Authorization header"
            })),
        ),
    }
}
