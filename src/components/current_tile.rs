use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::{WeatherSnapshot, format_celsius};

/// Label shown on the current-conditions tile
pub const TODAY_LABEL: &str = "Today";

/// Rows used by the temperature and condition lines
const DETAIL_ROWS: u16 = 2;

/// Tile with the current conditions: label, city name, glyph, temperature, text
pub struct CurrentTile;

pub struct CurrentTileProps<'a> {
    pub weather: &'a WeatherSnapshot,
}

impl Component<Action> for CurrentTile {
    type Props<'a> = CurrentTileProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" {TODAY_LABEL} "),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Fill(1),             // FIGlet city name
            Constraint::Length(1),           // Spacer
            Constraint::Length(DETAIL_ROWS), // Temperature + condition
        ])
        .flex(Flex::Center)
        .split(inner);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(weather.temp_c));
        frame.render_widget(ArtBox::new(&renderer, &weather.location), chunks[0]);

        let details = vec![
            Line::from(vec![
                Span::raw(weather.condition.icon.glyph()),
                Span::raw("  "),
                Span::styled(
                    format!("Temperature: {}", format_celsius(weather.temp_c)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            Line::from(Span::styled(
                weather.condition.text.clone(),
                Style::default().fg(Color::Gray),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(details), chunks[2]);
    }
}

/// Temperatures at the cold and hot ends of the city name colour scale
const SCALE_COLD_C: f32 = -10.0;
const SCALE_HOT_C: f32 = 40.0;
/// Half-width of the gradient window sampled around the current temperature
const SCALE_SPREAD: f32 = 0.12;

/// City name fill: a short slice of the cold-to-hot scale centred on `celsius`
fn temperature_gradient(celsius: f32) -> Fill {
    let t = scale_position(celsius);
    let start = scale_color((t - SCALE_SPREAD).max(0.0));
    let end = scale_color((t + SCALE_SPREAD).min(1.0));
    Fill::Linear(LinearGradient::horizontal(start, end))
}

fn scale_position(celsius: f32) -> f32 {
    ((celsius - SCALE_COLD_C) / (SCALE_HOT_C - SCALE_COLD_C)).clamp(0.0, 1.0)
}

fn scale_color(t: f32) -> ArtColor {
    let mix = |cold: f32, hot: f32| (cold + (hot - cold) * t).round() as u8;
    ArtColor::rgb(mix(90.0, 250.0), mix(170.0, 80.0), mix(250.0, 60.0))
}
