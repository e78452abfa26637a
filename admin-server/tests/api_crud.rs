// Router-level CRUD tests for the modules/roles/options API.

use admin_server::{AuthMode, Config, ServerState, build_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = Config::with_overrides(0, AuthMode::Local);
    build_router(ServerState::initialize(&config))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn module_crud_round_trip() {
    let app = test_app();

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/api/modules",
        Some(json!({"nombre": "Reportes", "descripcion": "Informes", "orden": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["nombre"], "Reportes");
    assert_eq!(body["data"]["activo"], true);

    // Read back
    let (status, body) = send(&app, "GET", &format!("/api/modules/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["descripcion"], "Informes");

    // Partial update: only orden changes, everything else is untouched
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/modules/{id}"),
        Some(json!({"orden": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre"], "Reportes");
    assert_eq!(body["data"]["descripcion"], "Informes");
    assert_eq!(body["data"]["orden"], 5);
    assert_eq!(body["data"]["activo"], true);

    // Delete
    let (status, body) = send(&app, "DELETE", &format!("/api/modules/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Module deleted successfully");

    // Deleting again is a stable NotFound
    let (status, body) = send(&app, "DELETE", &format!("/api/modules/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn module_create_requires_name() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/modules",
        Some(json!({"descripcion": "sin nombre"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn role_crud_round_trip() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/roles",
        Some(json!({"nombre": "Auditor", "descripcion": "Solo lectura"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["icono"], "fas fa-user");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/roles/{id}"),
        Some(json!({"activo": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activo"], false);
    assert_eq!(body["data"]["nombre"], "Auditor");

    let (status, _) = send(&app, "DELETE", &format!("/api/roles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn option_responses_populate_references() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/options",
        Some(json!({
            "nombre": "Aprobar Solicitud",
            "ruta": "/solicitudes/aprobar",
            "module": "module-solicitudes",
            "roles": ["role-admin"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Module and roles come back as populated sub-objects
    assert_eq!(body["data"]["module"]["nombre"], "Solicitudes");
    assert_eq!(body["data"]["roles"][0]["nombre"], "Administrador");

    let (status, body) = send(&app, "GET", "/api/options", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"].as_array().unwrap();
    assert!(
        listed
            .iter()
            .all(|o| o["module"].is_object() || o["module"].is_null())
    );
}

#[tokio::test]
async fn option_create_rejects_missing_references() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/options",
        Some(json!({
            "nombre": "Aprobar",
            "ruta": "/aprobar",
            "module": "no-such-module"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no-such-module"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/options",
        Some(json!({
            "nombre": "Aprobar",
            "ruta": "/aprobar",
            "module": "module-dashboard",
            "roles": ["no-such-role"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no-such-role"));

    // Neither failed create persisted anything
    let (_, body) = send(&app, "GET", "/api/options", None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["nombre"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Aprobar"));
}

#[tokio::test]
async fn deleted_role_leaves_stub_in_option_listing() {
    let app = test_app();

    // role-tesorero is referenced by the seeded options
    let (status, _) = send(&app, "DELETE", "/api/roles/role-tesorero", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/options/option-crear-solicitud", None).await;
    let roles = body["data"]["roles"].as_array().unwrap();
    // Dangling reference degrades to an id-only stub
    assert_eq!(roles[0]["_id"], "role-tesorero");
    assert!(roles[0].get("nombre").is_none());
}
