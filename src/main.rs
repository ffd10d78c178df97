use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{routing::get, Router};
use dotenvy::dotenv;
use tracing_subscriber;

use cyclesight::routes;
use cyclesight::settings::SettingsStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let storage_path =
        env::var("STORAGE_PATH").unwrap_or_else(|_| "cycle_settings.json".to_string());
    let store = Arc::new(SettingsStore::new(storage_path));

    let app = Router::new()
        .merge(routes::cycle::routes(store.clone()))
        .merge(routes::gestation::routes())
        .route("/health", get(|| async { "✅ Engine up" }));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3050);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🧠 Server running at {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
