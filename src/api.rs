//! WeatherAPI.com forecast client (served through RapidAPI)

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::icon::IconRef;
use crate::state::{Condition, ForecastDay, WeatherSnapshot};

pub const DEFAULT_BASE_URL: &str = "https://weatherapi-com.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "weatherapi-com.p.rapidapi.com";
/// Placeholder credential; real keys come from the command line or environment
pub const PLACEHOLDER_API_KEY: &str = "API_KEY";

/// Forecast horizon requested on every call
pub const FORECAST_DAYS: &str = "4";

/// Connection settings for the forecast endpoint
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherApiError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service returned HTTP {0}")]
    Status(u16),
    #[error("malformed weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    location: LocationPayload,
    current: CurrentPayload,
    forecast: ForecastPayload,
}

#[derive(Debug, Deserialize)]
struct LocationPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    temp_c: f32,
    condition: ConditionPayload,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    text: String,
    icon: IconRef,
}

#[derive(Debug, Deserialize)]
struct DayIconPayload {
    icon: IconRef,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    forecastday: Vec<ForecastDayPayload>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayPayload {
    date: NaiveDate,
    day: DayPayload,
}

#[derive(Debug, Deserialize)]
struct DayPayload {
    avgtemp_c: f32,
    condition: DayIconPayload,
}

impl From<ForecastResponse> for WeatherSnapshot {
    fn from(data: ForecastResponse) -> Self {
        WeatherSnapshot {
            location: data.location.name,
            temp_c: data.current.temp_c,
            condition: Condition {
                text: data.current.condition.text,
                icon: data.current.condition.icon,
            },
            forecast: data
                .forecast
                .forecastday
                .into_iter()
                .map(|entry| ForecastDay {
                    date: entry.date,
                    avg_temp_c: entry.day.avgtemp_c,
                    icon: entry.day.condition.icon,
                })
                .collect(),
        }
    }
}

/// Parse a forecast response body into a snapshot
pub fn parse_forecast(body: &str) -> Result<WeatherSnapshot, WeatherApiError> {
    let data: ForecastResponse = serde_json::from_str(body)?;
    Ok(data.into())
}

// ============================================================================
// Client
// ============================================================================

/// Client for the forecast endpoint
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl WeatherClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch current conditions plus a `FORECAST_DAYS`-day forecast for `city`.
    ///
    /// One request, no retry. Non-2xx statuses and bodies that do not match
    /// the expected shape are errors.
    #[instrument(skip(self), fields(days = FORECAST_DAYS))]
    pub async fn fetch_forecast(&self, city: &str) -> Result<WeatherSnapshot, WeatherApiError> {
        let url = format!(
            "{}/forecast.json",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("days", FORECAST_DAYS)])
            .header("x-rapidapi-key", self.config.api_key.as_str())
            .header("x-rapidapi-host", self.config.api_host.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let snapshot = parse_forecast(&body)?;
        debug!(
            location = %snapshot.location,
            days = snapshot.forecast.len(),
            "forecast loaded"
        );
        Ok(snapshot)
    }
}
