use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::{ForecastDay, format_celsius};

/// Width of one forecast tile, borders included
pub const TILE_WIDTH: u16 = 16;
/// Height of one forecast tile: borders + weekday + glyph + temperature
pub const TILE_HEIGHT: u16 = 5;

/// One tile per forecast day, left to right in the order given
pub struct ForecastRow;

pub struct ForecastRowProps<'a> {
    pub days: &'a [ForecastDay],
}

impl Component<Action> for ForecastRow {
    type Props<'a> = ForecastRowProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.days.is_empty() {
            return;
        }

        let tiles = Layout::horizontal(
            props
                .days
                .iter()
                .map(|_| Constraint::Length(TILE_WIDTH)),
        )
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

        for (day, tile) in props.days.iter().zip(tiles.iter()) {
            render_tile(frame, *tile, day);
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, day: &ForecastDay) {
    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(Span::styled(
            day.weekday(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(day.icon.glyph()).centered(),
        Line::from(format_celsius(day.avg_temp_c)).centered(),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
