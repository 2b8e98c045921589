//! Chart Shaper Module
//! Reshapes the film table into the per-chart-kind table the plotter consumes.

use std::collections::HashMap;

use chrono::Datelike;
use polars::prelude::*;

use super::dataset::{
    date_from_days, COL_GENRE, COL_IMDB_SCORE, COL_LANGUAGE, COL_PREMIERE, COL_RUNTIME,
};

/// The chart kinds on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    BarHorizontal,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::BarHorizontal,
        ChartKind::Pie,
        ChartKind::Scatter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::BarHorizontal => "Bar (horizontal)",
            ChartKind::Pie => "Pie",
            ChartKind::Scatter => "Scatter",
        }
    }

    /// Columns offered for the value axis of this chart kind. Bars plot a
    /// number per title, pies count occurrences of any column, scatter pairs
    /// the value with a free x column.
    pub fn value_columns(&self) -> &'static [&'static str] {
        match self {
            ChartKind::Bar | ChartKind::BarHorizontal => &[COL_RUNTIME, COL_IMDB_SCORE],
            ChartKind::Pie => &[
                COL_GENRE,
                COL_PREMIERE,
                COL_RUNTIME,
                COL_IMDB_SCORE,
                COL_LANGUAGE,
            ],
            ChartKind::Scatter => &[COL_PREMIERE, COL_RUNTIME, COL_IMDB_SCORE],
        }
    }
}

/// Reshapes selected rows into chart-ready tables.
pub struct ChartShaper;

impl ChartShaper {
    /// Build the table a chart of `kind` consumes.
    ///
    /// Bar, horizontal bar and scatter keep `[x_col, y_col]` for the selected
    /// rows. Pie reduces `y_col` to `[value, "Count"]` frequencies, rolled up
    /// by calendar year (empty years included) when the column holds premiere
    /// dates.
    pub fn shape(
        df: &DataFrame,
        kind: ChartKind,
        x_col: &str,
        y_col: &str,
        indices: &[IdxSize],
    ) -> PolarsResult<DataFrame> {
        let rows = IdxCa::from_vec("rows".into(), indices.to_vec());
        match kind {
            ChartKind::Scatter if x_col == y_col => df.select([x_col])?.take(&rows),
            ChartKind::Bar | ChartKind::BarHorizontal | ChartKind::Scatter => {
                df.select([x_col, y_col])?.take(&rows)
            }
            ChartKind::Pie if y_col == COL_PREMIERE => {
                Self::yearly_counts(&df.select([y_col])?.take(&rows)?, y_col)
            }
            ChartKind::Pie => Self::value_counts(&df.select([y_col])?.take(&rows)?, y_col),
        }
    }

    /// Count occurrences of each distinct value, most frequent first. Ties
    /// keep first-seen order. Nulls are not counted.
    fn value_counts(sub: &DataFrame, column: &str) -> PolarsResult<DataFrame> {
        let col = sub.column(column)?;

        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, u32> = HashMap::new();
        for i in 0..col.len() {
            let val = col.get(i)?;
            if val.is_null() {
                continue;
            }
            let key = val.to_string().trim_matches('"').to_string();
            if !counts.contains_key(&key) {
                order.push(key.clone());
            }
            *counts.entry(key).or_insert(0) += 1;
        }

        let count_of = |key: &String| counts.get(key).copied().unwrap_or(0);
        order.sort_by(|a, b| count_of(b).cmp(&count_of(a)));
        let totals: Vec<u32> = order.iter().map(count_of).collect();

        DataFrame::new(vec![
            Column::new(column.into(), order),
            Column::new("Count".into(), totals),
        ])
    }

    /// Count rows per calendar year over a date column. Every year between
    /// the earliest and latest premiere gets a row, even when its count is
    /// zero. Null dates are not counted.
    fn yearly_counts(sub: &DataFrame, column: &str) -> PolarsResult<DataFrame> {
        let col = sub.column(column)?;
        if col.dtype() != &DataType::Date {
            return Err(PolarsError::SchemaMismatch(
                format!("expected a date column for yearly counts, got {}", col.dtype()).into(),
            ));
        }

        let days = col.cast(&DataType::Int32)?;
        let days = days.i32()?;

        let mut counts: HashMap<i32, u32> = HashMap::new();
        for i in 0..days.len() {
            if let Some(date) = days.get(i).and_then(date_from_days) {
                *counts.entry(date.year()).or_insert(0) += 1;
            }
        }

        let mut years: Vec<i32> = Vec::new();
        if let (Some(&first), Some(&last)) = (counts.keys().min(), counts.keys().max()) {
            years = (first..=last).collect();
        }
        let totals: Vec<u32> = years
            .iter()
            .map(|year| counts.get(year).copied().unwrap_or(0))
            .collect();

        DataFrame::new(vec![
            Column::new(column.into(), years),
            Column::new("Count".into(), totals),
        ])
    }
}
