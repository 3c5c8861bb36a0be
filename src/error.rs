use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Fatal problems found while binding the data file at startup.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Table `{0}` not found in data file")]
    MissingTable(String),

    #[error("Column `{column}` not found in table `{table}`")]
    MissingColumn { table: String, column: String },

    #[error("Table `measurement` has no rows with a date")]
    EmptyMeasurements,

    #[error("Invalid date `{value}`: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Date {0} has no valid date one year earlier")]
    DateOutOfRange(chrono::NaiveDate),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Database(_) => {
                tracing::error!("Database error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
