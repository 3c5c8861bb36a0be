#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt; // For `.collect()`
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use surfs_up::climate::{AppState, create_router};
use surfs_up::db::{self, ClimateContext};
use tower::ServiceExt; // For `oneshot`

pub const WAIHEE: &str = "USC00519281";
pub const WAIKIKI: &str = "USC00519397";
pub const KANEOHE: &str = "USC00513117";

pub const MEASUREMENT_TABLE: &str = r#"
CREATE TABLE measurement (
    id INTEGER NOT NULL,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT,
    PRIMARY KEY (id)
);
"#;

pub const STATION_TABLE: &str = r#"
CREATE TABLE station (
    id INTEGER NOT NULL,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT,
    PRIMARY KEY (id)
);
"#;

/// Rows in insertion (rowid) order: station, date, prcp, tobs.
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    (WAIKIKI, "2016-08-22", Some(0.10), Some(78.0)),
    (WAIHEE, "2016-08-22", Some(2.15), Some(77.0)),
    (WAIKIKI, "2016-08-23", Some(0.00), Some(80.0)),
    (WAIHEE, "2016-08-23", Some(1.79), Some(80.0)),
    (WAIKIKI, "2016-08-24", Some(0.08), Some(79.0)),
    (WAIHEE, "2016-08-24", Some(2.28), Some(77.0)),
    (KANEOHE, "2016-12-31", None, Some(64.0)),
    (WAIKIKI, "2017-01-05", Some(0.00), Some(66.0)),
    (WAIHEE, "2017-01-10", Some(0.30), Some(62.0)),
    (KANEOHE, "2017-01-15", Some(0.70), None),
    (WAIKIKI, "2017-01-20", Some(0.02), Some(70.0)),
    (WAIHEE, "2017-01-31", Some(0.00), Some(68.0)),
    (WAIHEE, "2017-02-01", Some(0.05), Some(72.0)),
    (WAIHEE, "2017-08-18", Some(0.06), Some(79.0)),
    (WAIKIKI, "2017-08-23", Some(0.00), Some(81.0)),
    (WAIHEE, "2017-08-23", Some(0.45), Some(76.0)),
];

pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    (WAIKIKI, "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    (KANEOHE, "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    (WAIHEE, "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// Single-connection in-memory database so every query sees the same data.
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

pub async fn create_tables(pool: &SqlitePool) {
    sqlx::raw_sql(MEASUREMENT_TABLE)
        .execute(pool)
        .await
        .expect("Failed to create measurement table");
    sqlx::raw_sql(STATION_TABLE)
        .execute(pool)
        .await
        .expect("Failed to create station table");
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .expect("Failed to insert measurement");
}

pub async fn insert_station(
    pool: &SqlitePool,
    station: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) {
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(station)
    .bind(name)
    .bind(latitude)
    .bind(longitude)
    .bind(elevation)
    .execute(pool)
    .await
    .expect("Failed to insert station");
}

/// Database with both tables populated from the fixture rows above.
pub async fn fixture_pool() -> SqlitePool {
    let pool = empty_pool().await;
    create_tables(&pool).await;

    for (station, name, lat, lon, elev) in STATIONS {
        insert_station(&pool, station, name, *lat, *lon, *elev).await;
    }
    for (station, date, prcp, tobs) in MEASUREMENTS {
        insert_measurement(&pool, station, date, *prcp, *tobs).await;
    }

    pool
}

/// Bind the pool with the real binder and build the router over it.
pub async fn create_test_app(pool: SqlitePool) -> (Router, ClimateContext) {
    let climate = db::bind(&pool).await.expect("Failed to bind fixture");
    let state = Arc::new(AppState {
        db: pool,
        climate: climate.clone(),
    });
    (create_router(state), climate)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap();
    (status, json)
}
