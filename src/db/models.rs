use serde::Serialize;
use sqlx::FromRow;

/// One daily observation row of the `measurement` table. The source schema
/// does not declare `station` as NOT NULL.
#[derive(Debug, Clone, FromRow)]
pub struct Measurement {
    #[sqlx(rename = "station")]
    pub station_id: Option<String>,
    pub date: String,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
    #[sqlx(rename = "tobs")]
    pub temperature_observation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub temperature: Option<f64>,
}

impl From<Measurement> for TemperatureObservation {
    fn from(m: Measurement) -> Self {
        Self {
            date: m.date,
            temperature: m.temperature_observation,
        }
    }
}

/// MIN/AVG/MAX of `tobs` over a date window. All fields are null when no
/// rows matched.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "UPPERCASE")]
pub struct TemperatureRange {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}
