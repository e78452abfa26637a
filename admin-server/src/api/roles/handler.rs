//! Role API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::ApiResponse;
use shared::models::{Role, RoleCreate, RoleUpdate};

use crate::core::ServerState;
use crate::db::repository::Repository;
use crate::utils::{AppError, AppResult};

/// GET /api/roles - list all roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Role>>>> {
    let roles = state.roles().find_all().await?;
    Ok(Json(ApiResponse::ok(roles)))
}

/// GET /api/roles/{id} - fetch a single role
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Role>>> {
    let role = state
        .roles()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))?;
    Ok(Json(ApiResponse::ok(role)))
}

/// POST /api/roles - create a role
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Role>>)> {
    let role = state.roles().create(payload).await?;
    tracing::info!(role_id = %role.id, name = %role.name, "Role created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(role))))
}

/// PUT /api/roles/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<ApiResponse<Role>>> {
    let role = state.roles().update(&id, payload).await?;
    tracing::info!(role_id = %id, "Role updated");
    Ok(Json(ApiResponse::ok(role)))
}

/// DELETE /api/roles/{id} - delete (options keep their references)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.roles().delete(&id).await?;
    tracing::info!(role_id = %id, "Role deleted");
    Ok(Json(ApiResponse::with_message("Role deleted successfully")))
}
