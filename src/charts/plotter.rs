//! Chart Plotter Module
//! Draws the four figure kinds: egui_plot bars and scatter, painted pie.

use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Plot, Points};
use polars::prelude::*;
use std::ops::RangeInclusive;

use crate::charts::axis;
use crate::data::ChartKind;

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// A shaped table together with everything needed to draw it.
#[derive(Clone)]
pub struct ChartFigure {
    pub kind: ChartKind,
    pub shaped: DataFrame,
    pub x_col: String,
    pub y_col: String,
}

/// Draws one figure from a shaped table.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the figure into the given ui region. A table with nothing
    /// plottable paints the empty state instead.
    pub fn draw(ui: &mut egui::Ui, figure: &ChartFigure) {
        match figure.kind {
            ChartKind::Bar => Self::draw_bar(ui, figure, false),
            ChartKind::BarHorizontal => Self::draw_bar(ui, figure, true),
            ChartKind::Pie => Self::draw_pie(ui, figure),
            ChartKind::Scatter => Self::draw_scatter(ui, figure),
        }
    }

    fn empty_state(ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No data to plot").size(20.0));
        });
    }

    /// Per-category labels and values for the bar kinds. A null cell keeps
    /// its slot as `None` so the remaining bars stay aligned with the labels.
    fn bar_series(figure: &ChartFigure) -> PolarsResult<(Vec<String>, Vec<Option<f64>>)> {
        let label_col = figure.shaped.column(&figure.x_col)?;
        let mut labels = Vec::with_capacity(label_col.len());
        for i in 0..label_col.len() {
            labels.push(label_col.get(i)?.to_string().trim_matches('"').to_string());
        }

        let values = figure.shaped.column(&figure.y_col)?.cast(&DataType::Float64)?;
        let values = values.f64()?;
        let values = (0..values.len()).map(|i| values.get(i)).collect();

        Ok((labels, values))
    }

    /// Label/count pairs for the pie, in shaped-table order.
    fn pie_slices(figure: &ChartFigure) -> PolarsResult<Vec<(String, f64)>> {
        let labels = figure.shaped.column(&figure.y_col)?;
        let counts = figure.shaped.column("Count")?.cast(&DataType::Float64)?;
        let counts = counts.f64()?;

        let mut slices = Vec::with_capacity(labels.len());
        for i in 0..labels.len() {
            let label = labels.get(i)?.to_string().trim_matches('"').to_string();
            slices.push((label, counts.get(i).unwrap_or(0.0)));
        }
        Ok(slices)
    }

    fn draw_bar(ui: &mut egui::Ui, figure: &ChartFigure, horizontal: bool) {
        let Ok((labels, values)) = Self::bar_series(figure) else {
            return Self::empty_state(ui);
        };
        if labels.is_empty() || values.iter().all(Option::is_none) {
            return Self::empty_state(ui);
        }

        let mut bars = Vec::with_capacity(labels.len());
        for (i, value) in values.iter().enumerate() {
            if let Some(v) = *value {
                bars.push(Bar::new(i as f64, v).width(0.6).name(&labels[i]));
            }
        }

        let mut chart = BarChart::new(bars).color(PALETTE[0]).name(&figure.y_col);
        if horizontal {
            chart = chart.horizontal();
        }

        let formatter = move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let value = mark.value;
            if (value - value.round()).abs() > 0.001 || value.round() < 0.0 {
                return String::new();
            }
            labels
                .get(value.round() as usize)
                .cloned()
                .unwrap_or_default()
        };

        let mut plot = Plot::new("bar_plot").allow_scroll(false);
        plot = if horizontal {
            plot.y_axis_formatter(formatter).x_axis_label(&figure.y_col)
        } else {
            plot.x_axis_formatter(formatter).y_axis_label(&figure.y_col)
        };

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
    }

    fn draw_scatter(ui: &mut egui::Ui, figure: &ChartFigure) {
        let Ok((points, x_scale, y_scale)) =
            axis::scatter_points(&figure.shaped, &figure.x_col, &figure.y_col)
        else {
            return Self::empty_state(ui);
        };
        if points.is_empty() {
            return Self::empty_state(ui);
        }

        Plot::new("scatter_plot")
            .allow_scroll(false)
            .x_axis_label(&figure.x_col)
            .y_axis_label(&figure.y_col)
            .x_axis_formatter(move |mark, _range| x_scale.tick_label(mark.value))
            .y_axis_formatter(move |mark, _range| y_scale.tick_label(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(3.0)
                        .color(PALETTE[0])
                        .name(&figure.y_col),
                );
            });
    }

    fn draw_pie(ui: &mut egui::Ui, figure: &ChartFigure) {
        let slices = match Self::pie_slices(figure) {
            Ok(slices) => slices,
            Err(_) => return Self::empty_state(ui),
        };
        let total: f64 = slices.iter().map(|(_, count)| count).sum();
        if total <= 0.0 {
            return Self::empty_state(ui);
        }

        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = (rect.width().min(rect.height()) / 2.0 - 30.0).max(10.0);

        let point_at = |angle: f64| {
            egui::pos2(
                center.x + radius * angle.cos() as f32,
                center.y + radius * angle.sin() as f32,
            )
        };

        // First wedge starts at 12 o'clock, sweeping clockwise
        let mut start = -std::f64::consts::FRAC_PI_2;
        for (i, (label, count)) in slices.iter().enumerate() {
            if *count <= 0.0 {
                // a zero-angle wedge is degenerate
                continue;
            }
            let sweep = count / total * std::f64::consts::TAU;
            let color = PALETTE[i % PALETTE.len()];

            // Fan of small triangles; a single polygon stops being convex
            // once the wedge exceeds a half turn
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            for step in 0..steps {
                let a0 = start + sweep * step as f64 / steps as f64;
                let a1 = start + sweep * (step + 1) as f64 / steps as f64;
                painter.add(egui::Shape::convex_polygon(
                    vec![center, point_at(a0), point_at(a1)],
                    color,
                    egui::Stroke::NONE,
                ));
            }

            let mid = start + sweep / 2.0;
            let label_pos = egui::pos2(
                center.x + radius * 0.65 * mid.cos() as f32,
                center.y + radius * 0.65 * mid.sin() as f32,
            );
            painter.text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                format!("{label}\n{:.2}%", count / total * 100.0),
                egui::FontId::proportional(12.0),
                Color32::WHITE,
            );

            start += sweep;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::{COL_GENRE, COL_RUNTIME, COL_TITLE};

    fn bar_figure() -> ChartFigure {
        ChartFigure {
            kind: ChartKind::Bar,
            shaped: df!(
                COL_TITLE => ["Enter the Anime", "Dark Forces"],
                COL_RUNTIME => [Some(58i64), None],
            )
            .unwrap(),
            x_col: COL_TITLE.to_string(),
            y_col: COL_RUNTIME.to_string(),
        }
    }

    #[test]
    fn bar_series_keeps_null_slots_aligned() {
        let (labels, values) = ChartPlotter::bar_series(&bar_figure()).unwrap();
        assert_eq!(labels, vec!["Enter the Anime", "Dark Forces"]);
        assert_eq!(values, vec![Some(58.0), None]);
    }

    #[test]
    fn bar_series_missing_column_errors() {
        let mut figure = bar_figure();
        figure.y_col = "Budget".to_string();
        assert!(ChartPlotter::bar_series(&figure).is_err());
    }

    #[test]
    fn pie_slices_keep_shaped_order() {
        let figure = ChartFigure {
            kind: ChartKind::Pie,
            shaped: df!(
                COL_GENRE => ["Documentary", "Thriller"],
                "Count" => [2u32, 1],
            )
            .unwrap(),
            x_col: COL_TITLE.to_string(),
            y_col: COL_GENRE.to_string(),
        };

        let slices = ChartPlotter::pie_slices(&figure).unwrap();
        assert_eq!(
            slices,
            vec![("Documentary".to_string(), 2.0), ("Thriller".to_string(), 1.0)]
        );
    }

    #[test]
    fn pie_slices_require_a_count_column() {
        let figure = ChartFigure {
            kind: ChartKind::Pie,
            shaped: df!(COL_GENRE => ["Documentary"]).unwrap(),
            x_col: COL_TITLE.to_string(),
            y_col: COL_GENRE.to_string(),
        };
        assert!(ChartPlotter::pie_slices(&figure).is_err());
    }
}
