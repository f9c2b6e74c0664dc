pub mod current_tile;
pub mod forecast_row;
pub mod search_box;
pub mod shell;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_tile::{CurrentTile, CurrentTileProps, TODAY_LABEL};
pub use forecast_row::{ForecastRow, ForecastRowProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shell::{Shell, ShellProps};
pub use weather_widget::{WeatherView, WeatherWidget, WeatherWidgetProps};
