use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter a City...";

/// City input box. Enter commits the text, Esc or Ctrl+C quits.
pub struct SearchBox {
    input: TextInput,
}

pub struct SearchBoxProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for SearchBox {
    type Props<'a> = SearchBoxProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => return vec![Action::SearchConfirm],
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: Action::SearchTextChange,
            on_submit: confirm,
            on_cursor_move: Some(cursor_moved),
        };
        self.input.handle_event(event, input_props).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .title(" City ")
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::SearchTextChange,
            on_submit: confirm,
            on_cursor_move: Some(cursor_moved),
        };
        self.input.render(frame, inner, input_props);
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: None,
        },
        placeholder_style: Some(Style::default().fg(Color::DarkGray)),
        cursor_style: None,
    }
}

fn confirm(_: String) -> Action {
    Action::SearchConfirm
}

fn cursor_moved(_: usize) -> Action {
    Action::Render
}
