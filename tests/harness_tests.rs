//! Store flows using EffectStoreTestHarness
//!
//! Fetch effects are inspected, then their settle actions are fed back as
//! the async task would.

use chrono::NaiveDate;
use city_weather::{
    action::Action,
    components::{Component, Shell, ShellProps},
    effect::Effect,
    icon::IconRef,
    reducer::reducer,
    state::{AppState, Condition, ForecastDay, WeatherSnapshot},
};
use tui_dispatch::NumericComponentId;
use tui_dispatch::testing::*;

/// The mock payload from the London scenario
fn london() -> WeatherSnapshot {
    WeatherSnapshot {
        location: "London".into(),
        temp_c: 15.0,
        condition: Condition {
            text: "Cloudy".into(),
            icon: IconRef::new("//x/icon.png"),
        },
        forecast: vec![ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            avg_temp_c: 14.0,
            icon: IconRef::new("//x/i1.png"),
        }],
    }
}

fn named(location: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.into(),
        ..london()
    }
}

/// Render the whole shell at 80x30
macro_rules! render_shell {
    ($harness:expr) => {{
        let mut shell = Shell::new();
        $harness.render_plain(80, 30, |frame, area, state| {
            let props = ShellProps {
                state,
                is_focused: true,
            };
            shell.render(frame, area, props);
        })
    }};
}

#[test]
fn test_mount_fetches_default_city() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.assert_state(|s| s.loading);
    harness.assert_state(|s| s.weather.is_none());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { city, seq: 1 } if city == "London"),
    );

    let output = render_shell!(harness);
    assert!(output.contains("Loading..."), "Loading view expected:\n{output}");

    harness.complete_action(Action::WeatherDidLoad {
        seq: 1,
        snapshot: london(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| {
        s.weather.as_ref().map(|w| w.location.as_str()) == Some("London")
    });

    let output = render_shell!(harness);
    assert!(output.contains("Today"), "Current tile expected:\n{output}");
    assert!(output.contains("Temperature: 15°C"), "Temperature expected:\n{output}");
    assert!(output.contains("14°C"), "Forecast tile expected:\n{output}");
    assert!(output.contains("Monday"), "Weekday expected:\n{output}");
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_typing_then_enter_commits_city() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchTextChange("Paris".into()));
    let effects = harness.drain_effects();
    effects.effects_empty();

    let mut shell = Shell::new();
    let actions = harness.send_keys::<NumericComponentId, _, _>("enter", |state, event| {
        let props = ShellProps {
            state,
            is_focused: true,
        };
        shell
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_first(Action::SearchConfirm);

    for action in actions {
        harness.dispatch_collect(action);
    }

    harness.assert_state(|s| s.city == "Paris");
    harness.assert_state(|s| s.search_text.is_empty());
    harness.assert_state(|s| s.loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { city, .. } if city == "Paris"),
    );
}

#[test]
fn test_empty_confirm_never_fetches() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchConfirm);
    harness.dispatch_collect(Action::SearchTextChange("  ".into()));
    harness.dispatch_collect(Action::SearchConfirm);

    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.city == "London");
    harness.assert_state(|s| !s.loading);
}

#[test]
fn test_failure_keeps_stale_snapshot_silently() {
    let state = AppState {
        weather: Some(london()),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.dispatch_collect(Action::SearchTextChange("Atlantis".into()));
    harness.dispatch_collect(Action::SearchConfirm);
    harness.assert_state(|s| s.loading);

    harness.complete_action(Action::WeatherDidError {
        seq: 1,
        message: "weather service returned HTTP 400".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.weather == Some(london()));

    let output = render_shell!(harness);
    assert!(!output.contains("HTTP 400"), "Errors are never shown:\n{output}");
    assert!(output.contains("Temperature: 15°C"));
}

#[test]
fn test_rapid_confirms_latest_city_wins() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    for city in ["Paris", "Tokyo"] {
        harness.dispatch_collect(Action::SearchTextChange(city.into()));
        harness.dispatch_collect(Action::SearchConfirm);
    }

    let effects = harness.drain_effects();
    effects.effects_count(2);

    // Tokyo settles first; the slower Paris response arrives last
    harness.complete_action(Action::WeatherDidLoad {
        seq: 2,
        snapshot: named("Tokyo"),
    });
    harness.complete_action(Action::WeatherDidLoad {
        seq: 1,
        snapshot: named("Paris"),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 1, "Superseded result should not change state");
    harness.assert_state(|s| {
        s.weather.as_ref().map(|w| w.location.as_str()) == Some("Tokyo")
    });
    harness.assert_state(|s| !s.loading);
}

#[test]
fn test_loading_survives_superseded_settlement() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.dispatch_collect(Action::SearchTextChange("Tokyo".into()));
    harness.dispatch_collect(Action::SearchConfirm);

    harness.complete_action(Action::WeatherDidLoad {
        seq: 1,
        snapshot: london(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.loading);
    harness.assert_state(|s| s.weather.is_none());
}
