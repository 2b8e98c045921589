//! FilmLens Main Application
//! Main window with menu panel, table view and the chart output window.

use egui::SidePanel;
use log::{debug, warn};

use crate::charts::ChartFigure;
use crate::data::{dataset::COL_TITLE, parse_selection, ChartKind, ChartShaper, Dataset};
use crate::gui::{ChartWindow, MenuAction, MenuPanel, TableView};

/// Main application window.
pub struct FilmLensApp {
    dataset: Dataset,
    menu: MenuPanel,
    table: TableView,
    chart: ChartWindow,
}

impl FilmLensApp {
    pub fn new(dataset: Dataset) -> Self {
        let menu = MenuPanel::new(dataset.columns());
        let table = TableView::new(dataset.frame().clone());
        let mut app = Self {
            dataset,
            menu,
            table,
            chart: ChartWindow::new(),
        };
        app.show_all();
        app
    }

    /// Reset to the full-table view. Every failure path lands here.
    fn show_all(&mut self) {
        self.table.set_view(self.dataset.frame().clone(), None);
        self.chart.clear();
        self.menu.settings.rows_input.clear();
        self.menu.status = format!("Showing all {} rows", self.dataset.row_count());
    }

    /// Deduplicated single-column view, updated live from the combo box.
    fn handle_column_chosen(&mut self) {
        let column = self.menu.settings.column.clone();
        match self.dataset.unique_column(&column) {
            Ok(unique) => {
                debug!("column view: {} distinct values of {column}", unique.height());
                self.menu.status =
                    format!("Showing {} distinct values of {column}", unique.height());
                self.table.set_view(unique, None);
                self.chart.clear();
            }
            Err(err) => {
                warn!("column view failed for {column}: {err}");
                self.show_all();
            }
        }
    }

    /// Browse the rows named in the free-text entry.
    fn handle_show_rows(&mut self) {
        let input = self.menu.settings.rows_input.clone();
        let Some(indices) = parse_selection(&input) else {
            warn!("rejected row selection {input:?}");
            return self.show_all();
        };

        match self.dataset.rows_at(&indices) {
            Ok(rows) => {
                debug!("browse view: {} rows from {input:?}", rows.height());
                self.menu.status = format!(
                    "Showing {} of {} rows",
                    rows.height(),
                    self.dataset.row_count()
                );
                self.table.set_view(rows, Some(indices));
                self.chart.clear();
            }
            Err(err) => {
                warn!("row selection {input:?} failed: {err}");
                self.show_all();
            }
        }
    }

    /// Shape the selection for the chosen chart and open the graph window.
    fn handle_show_chart(&mut self) {
        let settings = self.menu.settings.clone();
        let Some(kind) = settings.chart_kind else {
            warn!("no chart type chosen");
            return self.show_all();
        };

        let (x_col, y_col) = match kind {
            ChartKind::Scatter => (settings.scatter_x, settings.scatter_y),
            _ => (COL_TITLE.to_string(), settings.value_col),
        };
        if x_col.is_empty() || y_col.is_empty() {
            warn!("incomplete column choice for {} chart", kind.label());
            return self.show_all();
        }

        let Some(indices) = parse_selection(&settings.rows_input) else {
            warn!("rejected row selection {:?}", settings.rows_input);
            return self.show_all();
        };

        match ChartShaper::shape(self.dataset.frame(), kind, &x_col, &y_col, &indices) {
            Ok(shaped) => {
                debug!(
                    "{} chart over {y_col} from {} selected rows",
                    kind.label(),
                    indices.len()
                );
                self.menu.status = format!(
                    "Plotted {} from {} of {} rows",
                    kind.label(),
                    indices.len(),
                    self.dataset.row_count()
                );
                self.table.set_view(shaped.clone(), None);
                self.chart.open_with(ChartFigure {
                    kind,
                    shaped,
                    x_col,
                    y_col,
                });
            }
            Err(err) => {
                warn!(
                    "{} chart over {y_col} failed for {:?}: {err}",
                    kind.label(),
                    settings.rows_input
                );
                self.show_all();
            }
        }
    }

    fn handle_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::ModeChanged | MenuAction::Reset => self.show_all(),
            MenuAction::ColumnChosen => self.handle_column_chosen(),
            MenuAction::ShowRows => self.handle_show_rows(),
            MenuAction::ShowChart => self.handle_show_chart(),
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::None => {}
        }
    }
}

impl eframe::App for FilmLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Menu
        SidePanel::left("menu_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.menu.show(ui);
                    self.handle_action(action, ctx);
                });
            });

        // Central panel - Table output
        egui::CentralPanel::default().show(ctx, |ui| {
            self.table.show(ui);
        });

        // Secondary window - Graph output
        self.chart.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::{COL_GENRE, COL_IMDB_SCORE, COL_LANGUAGE, COL_RUNTIME};
    use polars::prelude::*;

    fn ten_row_app() -> FilmLensApp {
        let titles: Vec<String> = (1..=10).map(|i| format!("Film {i}")).collect();
        let genres = [
            "Documentary",
            "Thriller",
            "Documentary",
            "Drama",
            "Thriller",
            "Documentary",
            "Drama",
            "Comedy",
            "Thriller",
            "Drama",
        ];
        let df = df!(
            COL_TITLE => titles,
            COL_GENRE => genres.as_slice(),
            COL_RUNTIME => (50i64..60).collect::<Vec<_>>(),
            COL_IMDB_SCORE => (0..10).map(|i| 2.0 + i as f64 / 10.0).collect::<Vec<_>>(),
            COL_LANGUAGE => vec!["English"; 10],
        )
        .unwrap();
        FilmLensApp::new(Dataset::from_frame(df))
    }

    fn titles_of(app: &FilmLensApp) -> Vec<String> {
        let frame = app.table.frame();
        let col = frame.column(COL_TITLE).unwrap();
        (0..frame.height())
            .map(|i| col.get(i).unwrap().to_string().trim_matches('"').to_string())
            .collect()
    }

    #[test]
    fn starts_on_the_full_table() {
        let app = ten_row_app();
        assert_eq!(app.table.frame().height(), 10);
        assert_eq!(app.menu.status, "Showing all 10 rows");
    }

    #[test]
    fn browse_comma_list_shows_those_rows_in_order() {
        let mut app = ten_row_app();
        app.menu.settings.rows_input = "1,3,5".to_string();
        app.handle_show_rows();

        assert_eq!(titles_of(&app), vec!["Film 1", "Film 3", "Film 5"]);
        assert_eq!(app.table.row_labels(), Some([0, 2, 4].as_slice()));
        assert_eq!(app.menu.status, "Showing 3 of 10 rows");
    }

    #[test]
    fn browse_range_is_inclusive() {
        let mut app = ten_row_app();
        app.menu.settings.rows_input = "2-4".to_string();
        app.handle_show_rows();
        assert_eq!(titles_of(&app), vec!["Film 2", "Film 3", "Film 4"]);
    }

    #[test]
    fn browse_garbage_falls_back_to_the_full_table() {
        let mut app = ten_row_app();
        app.menu.settings.rows_input = "abc".to_string();
        app.handle_show_rows();

        assert_eq!(app.table.frame().height(), 10);
        assert!(app.menu.settings.rows_input.is_empty());
        assert_eq!(app.menu.status, "Showing all 10 rows");
    }

    #[test]
    fn browse_out_of_range_falls_back_to_the_full_table() {
        let mut app = ten_row_app();
        app.menu.settings.rows_input = "99".to_string();
        app.handle_show_rows();
        assert_eq!(app.table.frame().height(), 10);
    }

    #[test]
    fn column_view_shows_distinct_values() {
        let mut app = ten_row_app();
        app.menu.settings.column = COL_GENRE.to_string();
        app.handle_column_chosen();

        let frame = app.table.frame();
        assert_eq!(frame.width(), 1);
        assert_eq!(frame.height(), 4);
        assert_eq!(app.menu.status, "Showing 4 distinct values of Genre");
    }

    #[test]
    fn chart_show_replaces_table_and_opens_window() {
        let mut app = ten_row_app();
        app.menu.settings.chart_kind = Some(ChartKind::Pie);
        app.menu.settings.value_col = COL_GENRE.to_string();
        app.menu.settings.rows_input = "1-10".to_string();
        app.handle_show_chart();

        assert!(app.chart.is_open());
        let frame = app.table.frame();
        assert_eq!(frame.get_column_names_str(), &[COL_GENRE, "Count"]);
        assert_eq!(frame.height(), 4);
    }

    #[test]
    fn chart_with_bad_rows_resets_and_stays_closed() {
        let mut app = ten_row_app();
        app.menu.settings.chart_kind = Some(ChartKind::Bar);
        app.menu.settings.value_col = COL_RUNTIME.to_string();
        app.menu.settings.rows_input = "abc".to_string();
        app.handle_show_chart();

        assert!(!app.chart.is_open());
        assert_eq!(app.table.frame().height(), 10);
    }

    #[test]
    fn chart_without_columns_resets() {
        let mut app = ten_row_app();
        app.menu.settings.chart_kind = Some(ChartKind::Scatter);
        app.menu.settings.rows_input = "1-5".to_string();
        app.handle_show_chart();

        assert!(!app.chart.is_open());
        assert_eq!(app.table.frame().height(), 10);
    }

    #[test]
    fn scatter_show_keeps_both_axis_columns() {
        let mut app = ten_row_app();
        app.menu.settings.chart_kind = Some(ChartKind::Scatter);
        app.menu.settings.scatter_x = COL_RUNTIME.to_string();
        app.menu.settings.scatter_y = COL_IMDB_SCORE.to_string();
        app.menu.settings.rows_input = "1,2".to_string();
        app.handle_show_chart();

        assert!(app.chart.is_open());
        assert_eq!(
            app.table.frame().get_column_names_str(),
            &[COL_RUNTIME, COL_IMDB_SCORE]
        );
        assert_eq!(app.table.frame().height(), 2);
    }

    #[test]
    fn reset_clears_a_plotted_view() {
        let mut app = ten_row_app();
        app.menu.settings.chart_kind = Some(ChartKind::Bar);
        app.menu.settings.value_col = COL_RUNTIME.to_string();
        app.menu.settings.rows_input = "1-3".to_string();
        app.handle_show_chart();
        assert!(app.chart.is_open());

        app.show_all();
        assert!(!app.chart.is_open());
        assert_eq!(app.table.frame().height(), 10);
        assert_eq!(app.menu.status, "Showing all 10 rows");
    }
}
