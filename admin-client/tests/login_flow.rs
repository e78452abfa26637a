// End-to-end login flow against an in-process admin server.

use admin_client::{ClientConfig, ClientError, PermissionCache};
use admin_server::{AuthMode, Config, ServerState, build_router};
use tempfile::TempDir;

/// Start the admin server on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let config = Config::with_overrides(0, AuthMode::Local);
    let app = build_router(ServerState::initialize(&config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn login_persists_and_survives_a_restart() {
    let base_url = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::new(&base_url).with_storage_dir(dir.path());

    let cache = PermissionCache::new(&config);
    assert!(!cache.is_authenticated());

    let permisos = cache.login("admin", "admin123").await.unwrap();
    assert!(cache.is_authenticated());
    assert!(cache.token().unwrap().starts_with("tok_"));
    assert_eq!(permisos.len(), 1);
    assert_eq!(permisos[0].role.name, "Administrador");

    // A fresh cache over the same storage restores the identical session
    let restored = PermissionCache::new(&config);
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), cache.token());
    assert_eq!(restored.user().unwrap(), cache.user().unwrap());
    assert_eq!(restored.permissions().unwrap(), permisos);
}

#[tokio::test]
async fn rejected_login_leaves_the_cache_logged_out() {
    let base_url = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::new(&base_url).with_storage_dir(dir.path());

    let cache = PermissionCache::new(&config);
    let err = cache.login("admin", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref msg)
        if msg == "Invalid username or password"));
    assert!(!cache.is_authenticated());

    let err = cache.login("admin", "").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn logout_requires_a_fresh_login() {
    let base_url = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::new(&base_url).with_storage_dir(dir.path());

    let cache = PermissionCache::new(&config);
    cache.login("admin", "admin123").await.unwrap();
    cache.logout();

    // Nothing to restore after logout
    let fresh = PermissionCache::new(&config);
    assert!(!fresh.is_authenticated());
}
