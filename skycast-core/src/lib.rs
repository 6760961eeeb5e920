//! Core library for the `skycast` weather viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The timeline weather client (fetch, decode, error classification)
//! - Shared domain models (unit systems, queries, responses)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::Config;
pub use error::{FetchError, ServiceError};
pub use model::{CurrentConditions, DayForecast, UnitSystem, WeatherQuery, WeatherResponse};
