use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A city name as typed by the user, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level body returned by the weather endpoint.
///
/// `results` is `None` when the city was not found: the body is not an
/// object, or its `results` is missing, `null`, `false`, `0` or `""`.
#[derive(Debug, Clone)]
pub struct ApiEnvelope {
    pub results: Option<WeatherResult>,
}

impl ApiEnvelope {
    /// Decode a response body. Fails only on invalid JSON or on a present,
    /// truthy `results` that is not a weather record.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_str(body)?)
    }

    pub fn from_value(body: Value) -> serde_json::Result<Self> {
        let results = match body {
            Value::Object(mut fields) => fields.remove("results").filter(is_truthy),
            _ => None,
        };

        Ok(Self {
            results: results.map(serde_json::from_value).transpose()?,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Current conditions plus the multi-day forecast, as sent by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub temp: f64,
    pub condition_slug: String,
    pub description: String,

    /// Index 0 is today and duplicates the current conditions.
    #[serde(default)]
    pub forecast: Vec<ForecastEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speedy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,

    /// Any other upstream fields, kept untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    pub max: f64,
    pub min: f64,
    pub condition: String,
    pub description: String,
    /// Percentage, 0..=100.
    pub rain_probability: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeatherResult {
    /// Forecast days after today.
    pub fn upcoming(&self) -> &[ForecastEntry] {
        self.forecast.get(1..).unwrap_or(&[])
    }
}
