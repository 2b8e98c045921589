//! GUI module - User interface components

mod app;
mod chart_window;
mod menu_panel;
mod table_view;

pub use app::FilmLensApp;
pub use chart_window::ChartWindow;
pub use menu_panel::{MenuAction, MenuMode, MenuPanel, MenuSettings};
pub use table_view::TableView;
