//! Axis Scale Module
//! Maps table columns onto plottable coordinates and tick labels.

use polars::prelude::*;

use crate::data::dataset::date_from_days;

/// How a column maps onto a plot axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    /// Values plot as themselves.
    Numeric,
    /// Values are days since the Unix epoch; ticks show the calendar date.
    Date,
    /// Values are first-seen ordinals; ticks show the original cell text.
    Category(Vec<String>),
}

impl AxisScale {
    /// Format a tick mark position for this scale. Category axes only label
    /// whole positions that map back to a value; anything else stays blank.
    pub fn tick_label(&self, value: f64) -> String {
        match self {
            AxisScale::Numeric => {
                let text = format!("{value:.2}");
                text.trim_end_matches('0').trim_end_matches('.').to_string()
            }
            AxisScale::Date => date_from_days(value.round() as i32)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            AxisScale::Category(labels) => {
                if (value - value.round()).abs() > 0.001 || value.round() < 0.0 {
                    return String::new();
                }
                labels
                    .get(value.round() as usize)
                    .cloned()
                    .unwrap_or_default()
            }
        }
    }
}

/// A column converted to plot coordinates, one entry per row. Nulls stay
/// `None` so callers can drop pairs instead of plotting placeholder zeros.
pub struct AxisValues {
    pub scale: AxisScale,
    pub coords: Vec<Option<f64>>,
}

fn is_numeric_type(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Convert one column to axis coordinates. Numeric columns cast to f64,
/// date columns become days since the epoch, everything else gets
/// first-seen ordinal positions with the original text kept for ticks.
pub fn axis_values(col: &Column) -> PolarsResult<AxisValues> {
    match col.dtype() {
        DataType::Date => {
            let days = col.cast(&DataType::Int32)?;
            let days = days.i32()?;
            let coords = (0..days.len())
                .map(|i| days.get(i).map(f64::from))
                .collect();
            Ok(AxisValues {
                scale: AxisScale::Date,
                coords,
            })
        }
        dtype if is_numeric_type(dtype) => {
            let values = col.cast(&DataType::Float64)?;
            let values = values.f64()?;
            let coords = (0..values.len()).map(|i| values.get(i)).collect();
            Ok(AxisValues {
                scale: AxisScale::Numeric,
                coords,
            })
        }
        _ => {
            let mut labels: Vec<String> = Vec::new();
            let mut coords: Vec<Option<f64>> = Vec::with_capacity(col.len());
            for i in 0..col.len() {
                let val = col.get(i)?;
                if val.is_null() {
                    coords.push(None);
                    continue;
                }
                let key = val.to_string().trim_matches('"').to_string();
                let pos = labels.iter().position(|l| l == &key).unwrap_or_else(|| {
                    labels.push(key);
                    labels.len() - 1
                });
                coords.push(Some(pos as f64));
            }
            Ok(AxisValues {
                scale: AxisScale::Category(labels),
                coords,
            })
        }
    }
}

/// Pair two columns into scatter points, dropping rows where either side is
/// null. Returns the points with the scale of each axis for tick labels.
pub fn scatter_points(
    df: &DataFrame,
    x_col: &str,
    y_col: &str,
) -> PolarsResult<(Vec<[f64; 2]>, AxisScale, AxisScale)> {
    let x = axis_values(df.column(x_col)?)?;
    let y = axis_values(df.column(y_col)?)?;

    let points = x
        .coords
        .iter()
        .zip(&y.coords)
        .filter_map(|(x, y)| Some([(*x)?, (*y)?]))
        .collect();

    Ok((points, x.scale, y.scale))
}
