use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;

use crate::cycle::cycle_snapshot;
use crate::models::{CycleSettings, CycleSnapshot, SettingsUpdate};
use crate::settings::SettingsStore;

pub fn routes(store: Arc<SettingsStore>) -> Router {
    Router::new()
        .route("/cycle", get(get_cycle_snapshot).post(save_settings))
        .route("/cycle/settings", get(get_settings))
        .with_state(store)
}

async fn get_cycle_snapshot(
    State(store): State<Arc<SettingsStore>>,
) -> Result<Json<CycleSnapshot>, StatusCode> {
    let settings = store.load().await;

    // Tracking not configured yet; there is nothing to compute from.
    let Some(last_period_start) = settings.last_period_start else {
        return Err(StatusCode::NOT_FOUND);
    };

    let today = Local::now().date_naive();
    Ok(Json(cycle_snapshot(
        last_period_start,
        settings.cycle_length_days,
        settings.period_length_days,
        today,
    )))
}

async fn get_settings(State(store): State<Arc<SettingsStore>>) -> Json<CycleSettings> {
    Json(store.load().await)
}

async fn save_settings(
    State(store): State<Arc<SettingsStore>>,
    Json(body): Json<SettingsUpdate>,
) -> Result<StatusCode, StatusCode> {
    store.save(body).await.map_err(|e| {
        tracing::error!("❌ Failed to persist cycle settings: {:?}", e);
        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    Ok(StatusCode::CREATED)
}
