pub mod climate;
pub mod config;
pub mod db;
pub mod error;
