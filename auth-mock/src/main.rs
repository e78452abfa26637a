use std::sync::Arc;

use auth_mock::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let port: u16 = std::env::var("MOCK_AUTH_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let app = router(Arc::new(AppState::new()));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Mock identity authority listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
