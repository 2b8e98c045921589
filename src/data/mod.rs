//! Data module - film table loading, row selection and chart shaping

pub mod dataset;
mod selection;
mod shaper;

pub use dataset::{Dataset, DatasetError};
pub use selection::parse_selection;
pub use shaper::{ChartKind, ChartShaper};
