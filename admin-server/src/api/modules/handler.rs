//! Module API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::ApiResponse;
use shared::models::{Module, ModuleCreate, ModuleUpdate};

use crate::core::ServerState;
use crate::db::repository::Repository;
use crate::utils::{AppError, AppResult};

/// GET /api/modules - list all modules
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Module>>>> {
    let modules = state.modules().find_all().await?;
    Ok(Json(ApiResponse::ok(modules)))
}

/// GET /api/modules/{id} - fetch a single module
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Module>>> {
    let module = state
        .modules()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Module {id} not found")))?;
    Ok(Json(ApiResponse::ok(module)))
}

/// POST /api/modules - create a module
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ModuleCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Module>>)> {
    let module = state.modules().create(payload).await?;
    tracing::info!(module_id = %module.id, name = %module.name, "Module created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(module))))
}

/// PUT /api/modules/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ModuleUpdate>,
) -> AppResult<Json<ApiResponse<Module>>> {
    let module = state.modules().update(&id, payload).await?;
    tracing::info!(module_id = %id, "Module updated");
    Ok(Json(ApiResponse::ok(module)))
}

/// DELETE /api/modules/{id} - delete (no cascade to options)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.modules().delete(&id).await?;
    tracing::info!(module_id = %id, "Module deleted");
    Ok(Json(ApiResponse::with_message("Module deleted successfully")))
}
