//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => start_fetch(state),

        Action::WeatherDidLoad { seq, snapshot } => {
            if seq != state.fetch_seq {
                tracing::debug!(
                    seq,
                    current = state.fetch_seq,
                    "dropping superseded weather result"
                );
                return DispatchResult::unchanged();
            }
            state.weather = Some(snapshot);
            state.last_error = None;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, message } => {
            if seq != state.fetch_seq {
                tracing::debug!(
                    seq,
                    current = state.fetch_seq,
                    "dropping superseded weather error"
                );
                return DispatchResult::unchanged();
            }
            // Snapshot is left as-is; the failure is never shown in the widget.
            state.last_error = Some(message);
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchTextChange(text) => {
            if text == state.search_text {
                return DispatchResult::unchanged();
            }
            state.search_text = text;
            DispatchResult::changed()
        }

        Action::SearchConfirm => {
            if state.search_text.trim().is_empty() {
                return DispatchResult::unchanged();
            }
            let city = std::mem::take(&mut state.search_text);
            if city == state.city {
                // The fetch is keyed on the city changing
                return DispatchResult::changed();
            }
            state.city = city;
            start_fetch(state)
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.fetch_seq = state.fetch_seq.wrapping_add(1);
    state.loading = true;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        city: state.city.clone(),
        seq: state.fetch_seq,
    })
}
