use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    error::{FetchError, LookupError},
    model::{ApiEnvelope, CityQuery, WeatherResult},
};

use super::WeatherProvider;

/// Client for the HG Brasil weather endpoint.
#[derive(Debug, Clone)]
pub struct HgBrasilProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl HgBrasilProvider {
    pub fn new(api_key: String, endpoint: String, http: Client) -> Self {
        Self { api_key, endpoint, http }
    }

    async fn fetch(&self, city: &CityQuery) -> Result<ApiEnvelope, FetchError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("key", self.api_key.as_str()), ("city_name", city.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(ApiEnvelope::from_json(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for HgBrasilProvider {
    #[instrument(skip_all, fields(city = %city))]
    async fn lookup(&self, city: &CityQuery) -> Result<WeatherResult, LookupError> {
        debug!(endpoint = %self.endpoint, "Requesting weather");

        let envelope = self.fetch(city).await.map_err(|err| {
            warn!(error = %err, "Weather request failed");
            LookupError::Fetch(err)
        })?;

        match envelope.results {
            Some(result) => {
                debug!(resolved = %result.city, days = result.forecast.len(), "Weather received");
                Ok(result)
            }
            None => {
                debug!("Response carried no results");
                Err(LookupError::NotFound)
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
