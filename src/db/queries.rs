use sqlx::SqlitePool;

use super::models::{Measurement, TemperatureRange};

// Dates are stored as ISO "YYYY-MM-DD" text, so plain string comparison
// orders them chronologically. Bounds are bound verbatim.

pub async fn get_measurements_since(
    pool: &SqlitePool,
    since: &str,
) -> Result<Vec<Measurement>, sqlx::Error> {
    sqlx::query_as::<_, Measurement>(
        r#"
        SELECT station, date, prcp, tobs
        FROM measurement
        WHERE date >= ?
        ORDER BY rowid
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await
}

pub async fn get_station_measurements_since(
    pool: &SqlitePool,
    station_id: &str,
    since: &str,
) -> Result<Vec<Measurement>, sqlx::Error> {
    sqlx::query_as::<_, Measurement>(
        r#"
        SELECT station, date, prcp, tobs
        FROM measurement
        WHERE date >= ? AND station = ?
        ORDER BY rowid
        "#,
    )
    .bind(since)
    .bind(station_id)
    .fetch_all(pool)
    .await
}

pub async fn get_station_ids(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT station
        FROM station
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_temperature_range_from(
    pool: &SqlitePool,
    start: &str,
) -> Result<TemperatureRange, sqlx::Error> {
    // Aggregates without GROUP BY always yield exactly one row.
    sqlx::query_as::<_, TemperatureRange>(
        r#"
        SELECT
            CAST(MIN(tobs) AS REAL) as tmin,
            AVG(tobs) as tavg,
            CAST(MAX(tobs) AS REAL) as tmax
        FROM measurement
        WHERE date >= ?
        "#,
    )
    .bind(start)
    .fetch_one(pool)
    .await
}

pub async fn get_temperature_range_between(
    pool: &SqlitePool,
    start: &str,
    end: &str,
) -> Result<TemperatureRange, sqlx::Error> {
    sqlx::query_as::<_, TemperatureRange>(
        r#"
        SELECT
            CAST(MIN(tobs) AS REAL) as tmin,
            AVG(tobs) as tavg,
            CAST(MAX(tobs) AS REAL) as tmax
        FROM measurement
        WHERE date >= ? AND date <= ?
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}
