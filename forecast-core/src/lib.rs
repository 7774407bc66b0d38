//! Core library for the forecast relay backend.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The gateway that forwards forecast lookups to OpenWeather
//! - Shared domain models (requests, payloads, errors)
//!
//! It is used by `forecast-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;

pub use config::ServerConfig;
pub use error::ForecastError;
pub use gateway::ForecastGateway;
pub use model::{ForecastPayload, ForecastRequest};
