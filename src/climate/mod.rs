pub mod handlers;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::db::ClimateContext;

pub struct AppState {
    pub db: SqlitePool,
    pub climate: ClimateContext,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1.0/precipitation", get(handlers::get_precipitation))
        .route("/api/v1.0/stations", get(handlers::get_stations))
        .route("/api/v1.0/tobs", get(handlers::get_tobs))
        .route("/api/v1.0/{start}", get(handlers::get_temperature_from))
        .route(
            "/api/v1.0/{start}/{end}",
            get(handlers::get_temperature_between),
        )
        .with_state(state)
}
