use axum::{extract::Query, routing::get, Json, Router};
use chrono::Local;
use serde::Deserialize;

use crate::gestation::gestation_snapshot;
use crate::models::GestationSnapshot;

#[derive(Deserialize)]
pub struct GestationQuery {
    pub due_date: String,
}

pub fn routes() -> Router {
    Router::new().route("/gestation", get(get_gestation_snapshot))
}

// A malformed due date still answers 200 with the documented fallback;
// the calculator never fails.
async fn get_gestation_snapshot(Query(params): Query<GestationQuery>) -> Json<GestationSnapshot> {
    let today = Local::now().date_naive();
    Json(gestation_snapshot(&params.due_date, today))
}
