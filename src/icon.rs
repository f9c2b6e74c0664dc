//! Condition icons
//!
//! WeatherAPI hands out icons as protocol-relative image URLs such as
//! `//cdn.weatherapi.com/weather/64x64/day/116.png`. The terminal cannot draw
//! the image, so the numeric condition code in the file name is mapped to a
//! coarse condition with an emoji glyph.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const ICON_SCHEME: &str = "https:";

/// Protocol-relative icon reference as returned by the API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Absolute URL, with the scheme prefixed onto `//host/...` references.
    pub fn url(&self) -> String {
        if self.0.starts_with("//") {
            format!("{ICON_SCHEME}{}", self.0)
        } else {
            self.0.clone()
        }
    }

    /// WeatherAPI condition code parsed from the file name (`116.png` -> 116).
    pub fn code(&self) -> Option<u16> {
        let file = self.0.rsplit('/').next()?;
        let stem = file.split('.').next()?;
        stem.parse().ok()
    }

    pub fn is_night(&self) -> bool {
        self.0.contains("/night/")
    }

    pub fn condition(&self) -> WeatherCondition {
        self.code()
            .map(WeatherCondition::from_code)
            .unwrap_or(WeatherCondition::Unknown)
    }

    /// Glyph to draw in place of the icon image
    pub fn glyph(&self) -> &'static str {
        self.condition().glyph(self.is_night())
    }
}

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a WeatherAPI condition code to a condition
    pub fn from_code(code: u16) -> Self {
        match code {
            113 => WeatherCondition::Clear,
            116 => WeatherCondition::PartlyCloudy,
            119 | 122 => WeatherCondition::Cloudy,
            143 | 248 | 260 => WeatherCondition::Fog,
            150 | 153 | 185 | 263 | 266 | 281 | 284 => WeatherCondition::Drizzle,
            176 | 293..=314 | 353..=359 => WeatherCondition::Rain,
            179 | 182 | 227 | 230 | 317..=350 | 362..=377 => WeatherCondition::Snow,
            200 | 386..=395 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    /// Emoji for the condition. At night a clear sky shows the moon and partial
    /// cloud drops the sun.
    pub fn glyph(self, night: bool) -> &'static str {
        use WeatherCondition::*;
        match (self, night) {
            (Clear, false) => "☀️",
            (Clear, true) => "🌙",
            (PartlyCloudy, false) => "⛅",
            (PartlyCloudy, true) => "☁️",
            (Cloudy | Unknown, _) => "☁️",
            (Fog, _) => "🌫️",
            (Drizzle, _) => "🌦️",
            (Rain, _) => "🌧️",
            (Snow, _) => "❄️",
            (Thunderstorm, _) => "⛈️",
        }
    }
}
