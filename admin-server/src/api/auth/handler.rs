//! Authentication Handlers
//!
//! The auth gateway. Credentials are validated either locally against
//! the user store or by delegating to the external identity authority,
//! depending on `AUTH_MODE`. Local failures use one generic message for
//! unknown users and wrong passwords so the endpoint cannot be used to
//! enumerate accounts.

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use shared::ApiResponse;
use shared::client::{LoginData, LoginRequest};
use shared::models::UserResponse;

use crate::auth::extract_bearer;
use crate::core::{AuthMode, ServerState};
use crate::db::repository::Repository;
use crate::permissions;
use crate::upstream::UpstreamError;
use crate::utils::{AppError, AppResult};

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    // Fail fast on missing credentials, before any lookup
    let Some(identifier) = req.identifier().map(str::to_string) else {
        return Err(AppError::validation("Username or email is required"));
    };
    let password = match req.password.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => return Err(AppError::validation("Password is required")),
    };

    match state.config.auth_mode {
        AuthMode::Local => login_local(&state, &identifier, &password)
            .await
            .map(|r| r.into_response()),
        AuthMode::Delegated => login_delegated(&state, &identifier, &password)
            .await
            .map(|r| r.into_response()),
    }
}

/// Local mode: exact credential match against the user store
async fn login_local(
    state: &ServerState,
    identifier: &str,
    password: &str,
) -> AppResult<Json<ApiResponse<LoginData>>> {
    let users = state.users();

    // Unified error message for unknown user and wrong password
    let Some(user) = users.find_by_identifier(identifier).await? else {
        tracing::warn!(identifier, "Login failed - user not found");
        return Err(AppError::authentication("Invalid username or password"));
    };

    if user.password != password {
        users.record_login_failure(&user.id).await?;
        tracing::warn!(identifier, "Login failed - invalid credentials");
        return Err(AppError::authentication("Invalid username or password"));
    }

    let roles = state.roles().find_by_ids(&user.role_ids).await?;
    if roles.len() != user.role_ids.len() {
        tracing::warn!(user_id = %user.id, "User references roles that no longer exist");
    }

    let modules = state.modules().find_all().await?;
    let options = state.options().find_all().await?;
    let permissions = permissions::assemble(&roles, &modules, &options)?;

    let user = users.record_login_success(&user.id).await?;
    let token = state.tokens.mint(&user.id);

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in successfully");

    Ok(Json(ApiResponse::ok(LoginData {
        token,
        user: UserResponse::from_user(&user, roles),
        permissions,
    })))
}

/// Delegated mode: forward credentials and relay the success payload verbatim
async fn login_delegated(
    state: &ServerState,
    identifier: &str,
    password: &str,
) -> AppResult<Json<serde_json::Value>> {
    let payload = state
        .upstream
        .login(identifier, password)
        .await
        .map_err(|e| {
            tracing::warn!(identifier, error = %e, "Delegated login failed");
            // Upstream faults never surface as 500; the best available
            // message travels in a 401.
            AppError::authentication(e.to_string())
        })?;

    tracing::info!(identifier, "Delegated login succeeded");
    Ok(Json(payload))
}

/// GET /api/auth/me - current user for a bearer token
pub async fn me(State(state): State<ServerState>, headers: HeaderMap) -> AppResult<Response> {
    let token = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer)
        .ok_or_else(|| AppError::authentication("Missing bearer token"))?;

    match state.config.auth_mode {
        AuthMode::Local => {
            let user_id = state
                .tokens
                .resolve(token)
                .ok_or_else(|| AppError::authentication("Invalid token"))?;
            let user = state
                .users()
                .find_by_id(&user_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
            let roles = state.roles().find_by_ids(&user.role_ids).await?;
            Ok(
                Json(ApiResponse::ok(UserResponse::from_user(&user, roles)))
                    .into_response(),
            )
        }
        AuthMode::Delegated => {
            let payload = state.upstream.profile(token).await.map_err(|e| match e {
                UpstreamError::Rejected { message, .. } => AppError::authentication(message),
                UpstreamError::Transport(_) => AppError::upstream(e.to_string()),
            })?;
            Ok(Json(payload).into_response())
        }
    }
}
