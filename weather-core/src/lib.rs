//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its HTTP client
//! - The lookup screen: request state, cancellable fetching and rendering
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod render;
pub mod screen;

pub use config::Config;
pub use controller::FetchController;
pub use error::{FetchError, LookupError};
pub use icon::Icon;
pub use model::{CityQuery, ForecastEntry, WeatherResult};
pub use provider::{WeatherProvider, hgbrasil::HgBrasilProvider, provider_from_config};
pub use render::View;
pub use screen::{RequestState, Submission, WeatherScreen};
