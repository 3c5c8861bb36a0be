pub mod models;
pub mod queries;
pub mod schema;

pub use models::{Measurement, TemperatureObservation, TemperatureRange};
pub use queries::{
    get_measurements_since, get_station_ids, get_station_measurements_since,
    get_temperature_range_between, get_temperature_range_from,
};
pub use schema::{ClimateContext, bind, connect};
