use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::forecast_row::TILE_HEIGHT;
use super::{
    Component, CurrentTile, CurrentTileProps, ForecastRow, ForecastRowProps, SearchBox,
    SearchBoxProps,
};
use crate::action::Action;
use crate::state::{AppState, WeatherSnapshot};

/// Input box height, borders included
const INPUT_HEIGHT: u16 = 3;
/// Width the input box and current tile are capped at
const CONTENT_WIDTH: u16 = 72;
const CURRENT_TILE_MIN_HEIGHT: u16 = 8;

/// The weather widget: input box plus loading or result area
#[derive(Default)]
pub struct WeatherWidget {
    search: SearchBox,
}

pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        // The input stays interactive while a fetch is in flight
        self.search
            .handle_event(
                event,
                SearchBoxProps {
                    value: &props.state.search_text,
                    is_focused: props.is_focused,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [column] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [input_area, _, result_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        self.search.render(
            frame,
            input_area,
            SearchBoxProps {
                value: &props.state.search_text,
                is_focused: props.is_focused,
            },
        );

        match WeatherView::from_state(props.state) {
            WeatherView::Loading => render_loading(frame, result_area, props.state),
            WeatherView::Empty => {}
            WeatherView::Ready(weather) => {
                // Forecast tiles may spill wider than the column
                let row_area = Rect {
                    x: area.x,
                    width: area.width,
                    ..result_area
                };
                render_ready(frame, result_area, row_area, weather);
            }
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let loading = Line::from(vec![
        Span::styled(state.spinner_frame(), Style::default().fg(Color::Blue)),
        Span::raw(" "),
        Span::styled("Loading...", Style::default().fg(Color::Gray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(loading), line);
}

fn render_ready(frame: &mut Frame, tile_area: Rect, row_area: Rect, weather: &WeatherSnapshot) {
    let [current_area, _] = Layout::vertical([
        Constraint::Min(CURRENT_TILE_MIN_HEIGHT),
        Constraint::Length(TILE_HEIGHT + 1),
    ])
    .areas(tile_area);
    let [_, forecast_area] = Layout::vertical([
        Constraint::Min(CURRENT_TILE_MIN_HEIGHT + 1),
        Constraint::Length(TILE_HEIGHT),
    ])
    .areas(row_area);

    let mut current = CurrentTile;
    current.render(frame, current_area, CurrentTileProps { weather });

    let mut row = ForecastRow;
    row.render(
        frame,
        forecast_area,
        ForecastRowProps {
            days: &weather.forecast,
        },
    );
}

// ============================================================================
// Helpers
// ============================================================================

/// Mutually exclusive view states, picked from (loading, snapshot)
#[derive(Debug, PartialEq)]
pub enum WeatherView<'a> {
    Loading,
    Empty,
    Ready(&'a WeatherSnapshot),
}

impl<'a> WeatherView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        match (&state.weather, state.loading) {
            (_, true) => WeatherView::Loading,
            (None, false) => WeatherView::Empty,
            (Some(weather), false) => WeatherView::Ready(weather),
        }
    }
}
