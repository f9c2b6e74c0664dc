//! City weather - terminal weather lookup widget

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use city_weather::action::Action;
use city_weather::api::{
    ApiConfig, DEFAULT_API_HOST, DEFAULT_BASE_URL, PLACEHOLDER_API_KEY, WeatherClient,
};
use city_weather::components::{Component, Shell, ShellProps};
use city_weather::effect::{Effect, WEATHER_TASK, fetch_weather};
use city_weather::logging;
use city_weather::reducer::reducer;
use city_weather::state::{AppState, DEFAULT_CITY, LOADING_ANIM_TICK_MS};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};

/// Look up current weather and a 4-day forecast by city
#[derive(Parser, Debug)]
#[command(name = "city-weather")]
#[command(about = "A terminal weather lookup built on tui-dispatch")]
struct Args {
    /// City fetched on startup
    #[arg(
        long,
        short,
        env = "WEATHER_CITY",
        default_value = DEFAULT_CITY,
        value_parser = NonEmptyStringValueParser::new()
    )]
    city: String,

    /// RapidAPI key for the WeatherAPI.com forecast endpoint
    #[arg(
        long,
        env = "WEATHER_API_KEY",
        default_value = PLACEHOLDER_API_KEY,
        hide_env_values = true
    )]
    api_key: String,

    /// RapidAPI host header
    #[arg(long, env = "WEATHER_API_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,

    /// Forecast endpoint base URL
    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log file (defaults to the platform data directory)
    #[arg(long, env = "WEATHER_LOG")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Widget,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        Some(WeatherComponentId::Widget)
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        None
    }

    fn binding_context(&self, _id: WeatherComponentId) -> WeatherContext {
        WeatherContext::Main
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        api_key,
        api_host,
        base_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::initialize_logging(&log_path)?;

    let client = Arc::new(WeatherClient::new(ApiConfig {
        base_url,
        api_key,
        api_host,
    }));
    tracing::info!(%city, base_url = %client.config().base_url, "starting");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(city))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, client).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("exiting");
    Ok(())
}

struct WeatherUi {
    shell: Shell,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            shell: Shell::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Widget, area);

        let props = ShellProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.shell.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = ShellProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.shell.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    client: Arc<WeatherClient>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_widget = Rc::clone(&ui);
    bus.register(WeatherComponentId::Widget, move |event, state| {
        ui_widget.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            // Mount: fetch the initial city once
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&client)),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: Arc<WeatherClient>) {
    match effect {
        Effect::FetchWeather { city, seq } => {
            tracing::info!(%city, seq, "fetching weather");
            ctx.tasks().spawn(WEATHER_TASK, async move {
                fetch_weather(&client, city, seq).await
            });
        }
    }
}
