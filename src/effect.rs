//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::WeatherClient;

/// Task key shared by all weather fetches; a new fetch replaces the running one
pub const WEATHER_TASK: &str = "weather";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions and forecast for `city`, tagged with `seq`
    FetchWeather { city: String, seq: u64 },
}

/// Run one fetch and turn its outcome into the settle action for `seq`.
///
/// Every outcome maps to exactly one settle action, which is what clears the
/// loading flag in the reducer.
pub async fn fetch_weather(client: &WeatherClient, city: String, seq: u64) -> Action {
    match client.fetch_forecast(&city).await {
        Ok(snapshot) => Action::WeatherDidLoad { seq, snapshot },
        Err(error) => {
            tracing::warn!(%city, seq, %error, "weather fetch failed");
            Action::WeatherDidError {
                seq,
                message: error.to_string(),
            }
        }
    }
}
