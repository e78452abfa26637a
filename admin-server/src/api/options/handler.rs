//! Menu Option API Handlers
//!
//! Responses populate the `module` and `roles` references into full
//! sub-objects; a dangling role degrades to an id-only stub and a
//! dangling module serializes as absent.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::ApiResponse;
use shared::models::{
    MenuOption, MenuOptionCreate, MenuOptionResponse, MenuOptionUpdate, Module, Role, RoleSummary,
};

use crate::core::ServerState;
use crate::db::repository::Repository;
use crate::utils::{AppError, AppResult};

fn populate(option: MenuOption, modules: &[Module], roles: &[Role]) -> MenuOptionResponse {
    let module = modules.iter().find(|m| m.id == option.module_id).cloned();
    let roles = option
        .role_ids
        .iter()
        .map(|role_id| {
            roles
                .iter()
                .find(|r| &r.id == role_id)
                .map(RoleSummary::from)
                .unwrap_or_else(|| RoleSummary::stub(role_id))
        })
        .collect();

    MenuOptionResponse {
        id: option.id,
        name: option.name,
        route: option.route,
        icon: option.icon,
        order: option.order,
        module,
        roles,
        is_active: option.is_active,
        created_at: option.created_at,
        updated_at: option.updated_at,
    }
}

async fn populate_one(state: &ServerState, option: MenuOption) -> AppResult<MenuOptionResponse> {
    let modules = state.modules().find_all().await?;
    let roles = state.roles().find_all().await?;
    Ok(populate(option, &modules, &roles))
}

/// GET /api/options - list all options with references populated
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<MenuOptionResponse>>>> {
    let options = state.options().find_all().await?;
    let modules = state.modules().find_all().await?;
    let roles = state.roles().find_all().await?;

    let populated = options
        .into_iter()
        .map(|o| populate(o, &modules, &roles))
        .collect();
    Ok(Json(ApiResponse::ok(populated)))
}

/// GET /api/options/{id} - fetch a single option
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuOptionResponse>>> {
    let option = state
        .options()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Option {id} not found")))?;
    Ok(Json(ApiResponse::ok(populate_one(&state, option).await?)))
}

/// POST /api/options - create an option under a module
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuOptionCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<MenuOptionResponse>>)> {
    let option = state.options().create(payload).await?;
    tracing::info!(option_id = %option.id, name = %option.name, "Option created");
    let populated = populate_one(&state, option).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(populated))))
}

/// PUT /api/options/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuOptionUpdate>,
) -> AppResult<Json<ApiResponse<MenuOptionResponse>>> {
    let option = state.options().update(&id, payload).await?;
    tracing::info!(option_id = %id, "Option updated");
    Ok(Json(ApiResponse::ok(populate_one(&state, option).await?)))
}

/// DELETE /api/options/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.options().delete(&id).await?;
    tracing::info!(option_id = %id, "Option deleted");
    Ok(Json(ApiResponse::with_message("Option deleted successfully")))
}
