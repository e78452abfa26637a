// Auth gateway tests: local-mode login and current-user lookup.

use admin_server::{AuthMode, Config, ServerState, build_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_state() -> ServerState {
    let config = Config::with_overrides(0, AuthMode::Local);
    ServerState::initialize(&config)
}

async fn post_login(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn missing_password_fails_fast_with_400() {
    let app = build_router(test_state());

    let (status, body) = post_login(&app, json!({"username": "admin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Password"));

    let (status, body) = post_login(&app, json!({"password": "admin123"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn bad_credentials_collapse_to_one_generic_401() {
    let state = test_state();
    let app = build_router(state.clone());

    // Unknown user
    let (status, body) =
        post_login(&app, json!({"username": "nobody", "password": "whatever"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let unknown_user_error = body["error"].as_str().unwrap().to_string();

    // Wrong password for an existing user: same status, same message
    let (status, body) = post_login(&app, json!({"username": "admin", "password": "wrong"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"].as_str().unwrap(), unknown_user_error);

    // The failed attempt was counted against the existing account
    let user = state
        .users()
        .find_by_identifier("admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.failed_attempts, 1);
}

#[tokio::test]
async fn successful_login_returns_token_user_and_permissions() {
    let state = test_state();
    let app = build_router(state.clone());

    let (status, body) =
        post_login(&app, json!({"username": "admin", "password": "admin123"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert!(data["token"].as_str().unwrap().starts_with("tok_"));

    // Sanitized user: no password field, roles populated
    assert!(data["user"].get("password").is_none());
    assert_eq!(data["user"]["username"], "admin");
    assert_eq!(data["user"]["roles"][0]["nombre"], "Administrador");

    // Permission tree: one entry for the admin role, modules ordered,
    // options grouped under their owning module
    let permisos = data["permisos"].as_array().unwrap();
    assert_eq!(permisos.len(), 1);
    assert_eq!(permisos[0]["rol"]["_id"], "role-admin");
    let modulos = permisos[0]["modulos"].as_array().unwrap();
    assert_eq!(modulos[0]["module"]["_id"], "module-dashboard");
    assert_eq!(modulos[1]["module"]["_id"], "module-solicitudes");
    // "Crear Solicitud" is tesorero-only, so the admin sees one option there
    let opciones = modulos[1]["opciones"].as_array().unwrap();
    assert_eq!(opciones.len(), 1);
    assert_eq!(opciones[0]["ruta"], "/solicitudes");

    // Counter reset on success
    let user = state
        .users()
        .find_by_identifier("admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.failed_attempts, 0);
}

#[tokio::test]
async fn email_works_as_login_identifier() {
    let app = build_router(test_state());

    let (status, _) = post_login(
        &app,
        json!({"email": "admin@example.com", "password": "admin123"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn me_resolves_minted_tokens() {
    let app = build_router(test_state());

    let (_, body) = post_login(&app, json!({"username": "admin", "password": "admin123"})).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["username"], "admin");

    // Unknown token is a 401
    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer tok_bogus")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
