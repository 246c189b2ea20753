use crate::{
    Config,
    error::LookupError,
    model::{CityQuery, WeatherResult},
    provider::hgbrasil::HgBrasilProvider,
};
use anyhow::Context;
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod hgbrasil;

/// A source of weather results for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn lookup(&self, city: &CityQuery) -> Result<WeatherResult, LookupError>;
}

/// Construct the HTTP provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let http = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .context("Failed to build HTTP client")?;

    Ok(Arc::new(HgBrasilProvider::new(
        api_key.to_owned(),
        config.endpoint.clone(),
        http,
    )))
}
