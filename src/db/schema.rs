use std::str::FromStr;

use chrono::{Months, NaiveDate};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::SchemaError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const WINDOW_START_FORMAT: &str = "%Y-%m-%d 00:00:00";

/// Tables and the columns each must carry.
const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    (
        "station",
        &["station", "name", "latitude", "longitude", "elevation"],
    ),
];

/// Values derived from the dataset once at startup and shared by every
/// request. They are not refreshed if the data file changes underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateContext {
    pub last_date: NaiveDate,
    pub one_year_ago: NaiveDate,
    pub most_active_station: String,
}

impl ClimateContext {
    /// Lower bound of the twelve-month window, as midnight of `one_year_ago`.
    /// Stored dates are bare `YYYY-MM-DD`, which sorts before this value, so
    /// the `one_year_ago` day itself falls outside the window.
    pub fn window_start_param(&self) -> String {
        self.one_year_ago.format(WINDOW_START_FORMAT).to_string()
    }
}

/// Open the existing data file read-only. A missing file is an error.
pub async fn connect(database_url: &str) -> Result<SqlitePool, SchemaError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Validate the two-table layout and derive the [`ClimateContext`].
pub async fn bind(pool: &SqlitePool) -> Result<ClimateContext, SchemaError> {
    verify_schema(pool).await?;

    let last_date = get_last_date(pool).await?;
    let one_year_ago =
        one_year_before(last_date).ok_or(SchemaError::DateOutOfRange(last_date))?;
    let most_active_station = get_most_active_station(pool).await?;

    Ok(ClimateContext {
        last_date,
        one_year_ago,
        most_active_station,
    })
}

async fn verify_schema(pool: &SqlitePool) -> Result<(), SchemaError> {
    for (table, columns) in REQUIRED_SCHEMA {
        let found: Option<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(*table)
                .fetch_optional(pool)
                .await?;
        if found.is_none() {
            return Err(SchemaError::MissingTable(table.to_string()));
        }

        let present: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(*table)
            .fetch_all(pool)
            .await?;
        for column in columns.iter() {
            if !present.iter().any(|name| name.eq_ignore_ascii_case(column)) {
                return Err(SchemaError::MissingColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
    }

    Ok(())
}

async fn get_last_date(pool: &SqlitePool) -> Result<NaiveDate, SchemaError> {
    let max_date: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await?;
    let value = max_date.ok_or(SchemaError::EmptyMeasurements)?;

    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|source| SchemaError::InvalidDate { value, source })
}

/// Station with the most measurement rows. Ties go to the lowest station id.
async fn get_most_active_station(pool: &SqlitePool) -> Result<String, SchemaError> {
    let station: Option<String> = sqlx::query_scalar(
        r#"
        SELECT station
        FROM measurement
        WHERE station IS NOT NULL
        GROUP BY station
        ORDER BY COUNT(*) DESC, station ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    station.ok_or(SchemaError::EmptyMeasurements)
}

/// Same month and day one year earlier; Feb 29 falls back to Feb 28.
pub fn one_year_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(12))
}
