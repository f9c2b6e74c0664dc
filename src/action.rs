//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch weather for the committed city (dispatched on mount)
    WeatherFetch,

    /// Result: fetch `seq` succeeded
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Result: fetch `seq` failed
    WeatherDidError { seq: u64, message: String },

    // ===== Search category =====
    /// Input box text changed
    SearchTextChange(String),

    /// Accept key pressed in the input box
    SearchConfirm,

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
