use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::climate::AppState;
use crate::db::{TemperatureObservation, TemperatureRange};
use crate::error::ApiError;

pub async fn home() -> Html<&'static str> {
    Html(concat!(
        "Available Routes:<br/>",
        "<a href='/api/v1.0/precipitation'>/api/v1.0/precipitation</a><br/>",
        "<a href='/api/v1.0/stations'>/api/v1.0/stations</a><br/>",
        "<a href='/api/v1.0/tobs'>/api/v1.0/tobs</a><br/>",
        "<a href='/api/v1.0/&lt;start&gt;'>/api/v1.0/&lt;start&gt;</a><br/>",
        "<a href='/api/v1.0/&lt;start&gt;/&lt;end&gt;'>/api/v1.0/&lt;start&gt;/&lt;end&gt;</a><br/>",
    ))
}

/// Precipitation for the last twelve months keyed by date. When a date has
/// several rows the last one in table order wins.
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let since = state.climate.window_start_param();
    let rows = crate::db::get_measurements_since(&state.db, &since).await?;
    tracing::debug!("Precipitation since {}: {} rows", since, rows.len());

    let by_date: BTreeMap<String, Option<f64>> = rows
        .into_iter()
        .map(|m| (m.date, m.precipitation))
        .collect();
    Ok(Json(by_date))
}

pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let stations = crate::db::get_station_ids(&state.db).await?;
    tracing::debug!("Listing {} stations", stations.len());

    Ok(Json(stations))
}

/// Temperature observations of the most active station for the last twelve
/// months.
pub async fn get_tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    let since = state.climate.window_start_param();
    let station = &state.climate.most_active_station;
    let rows = crate::db::get_station_measurements_since(&state.db, station, &since).await?;
    tracing::debug!(
        "Temperature observations for {} since {}: {} rows",
        station,
        since,
        rows.len()
    );

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

// `start` and `end` are not validated. A value that is not an ISO date simply
// matches nothing (or an unexpected range) and the aggregates come back null.

pub async fn get_temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureRange>>, ApiError> {
    let range = crate::db::get_temperature_range_from(&state.db, &start).await?;
    tracing::debug!("Temperature range from {}: {:?}", start, range);
    Ok(Json(vec![range]))
}

pub async fn get_temperature_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureRange>>, ApiError> {
    let range = crate::db::get_temperature_range_between(&state.db, &start, &end).await?;
    tracing::debug!("Temperature range {} to {}: {:?}", start, end, range);
    Ok(Json(vec![range]))
}
