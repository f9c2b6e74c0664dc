//! Application state - single source of truth

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icon::IconRef;

/// City fetched on startup when none is given
pub const DEFAULT_CITY: &str = "London";

/// Spinner animation timing
pub const LOADING_ANIM_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = [
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Current condition as reported by the API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub text: String,
    pub icon: IconRef,
}

/// One day of the forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub avg_temp_c: f32,
    pub icon: IconRef,
}

impl ForecastDay {
    /// Full English weekday name, e.g. "Monday"
    pub fn weekday(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// Weather for one committed city. Replaced wholesale on every successful fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temp_c: f32,
    pub condition: Condition,
    /// Chronological, as returned by the API
    pub forecast: Vec<ForecastDay>,
}

/// Format a Celsius reading the way the tiles show it (`14°C`, `14.5°C`).
pub fn format_celsius(celsius: f32) -> String {
    format!("{celsius}°C")
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City accepted for fetching
    #[debug(section = "Search", label = "City")]
    pub city: String,

    /// In-progress input box text
    #[debug(section = "Search", label = "Input")]
    pub search_text: String,

    /// Last successful fetch, kept across failures
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub weather: Option<WeatherSnapshot>,

    /// True while the most recent fetch is in flight
    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    /// Token of the most recent fetch; older settlements are dropped
    #[debug(section = "Weather", label = "Fetch #")]
    pub fetch_seq: u64,

    /// Most recent failure. Logged and shown in the debug overlay only.
    #[debug(section = "Weather", label = "Last error", debug_fmt)]
    pub last_error: Option<String>,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            search_text: String::new(),
            weather: None,
            loading: false,
            fetch_seq: 0,
            last_error: None,
            tick_count: 0,
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_date() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            avg_temp_c: 14.0,
            icon: IconRef::default(),
        };
        assert_eq!(day.weekday(), "Monday");
    }

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(14.0), "14°C");
        assert_eq!(format_celsius(14.5), "14.5°C");
        assert_eq!(format_celsius(-3.2), "-3.2°C");
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = AppState::default();
        let first = state.spinner_frame();
        state.tick_count = SPINNER_FRAMES.len() as u32;
        assert_eq!(state.spinner_frame(), first);
    }
}
