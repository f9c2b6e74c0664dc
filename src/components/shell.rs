use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherWidget, WeatherWidgetProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for Shell - read-only view of state
pub struct ShellProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Top-level container: mounts the weather widget above a key hint bar
#[derive(Default)]
pub struct Shell {
    widget: WeatherWidget,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Shell {
    type Props<'a> = ShellProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.widget
            .handle_event(
                event,
                WeatherWidgetProps {
                    state: props.state,
                    is_focused: props.is_focused,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ShellProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top margin
            Constraint::Min(1),    // Widget
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.widget.render(
            frame,
            chunks[1],
            WeatherWidgetProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
