//! Charts module - Chart rendering

mod axis;
mod plotter;

pub use axis::AxisScale;
pub use plotter::{ChartFigure, ChartPlotter};
