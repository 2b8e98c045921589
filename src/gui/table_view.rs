//! Table View Widget
//! Central panel showing the current view of the film table.

use egui_extras::{Column as TableColumn, TableBuilder};
use polars::prelude::*;

/// The table currently on screen: a sub-frame of the dataset plus the
/// original 1-based row numbers when the view came from a browse selection.
pub struct TableView {
    view: DataFrame,
    row_labels: Option<Vec<IdxSize>>,
}

impl TableView {
    pub fn new(view: DataFrame) -> Self {
        Self {
            view,
            row_labels: None,
        }
    }

    /// Replace the displayed frame. `row_labels` carries the rows' zero-based
    /// positions in the full dataset; without them the `#` column counts 1..n.
    pub fn set_view(&mut self, view: DataFrame, row_labels: Option<Vec<IdxSize>>) {
        self.view = view;
        self.row_labels = row_labels;
    }

    pub fn frame(&self) -> &DataFrame {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn row_labels(&self) -> Option<&[IdxSize]> {
        self.row_labels.as_deref()
    }

    fn row_number(&self, row: usize) -> u64 {
        match &self.row_labels {
            Some(labels) => labels.get(row).map(|&i| u64::from(i) + 1).unwrap_or(0),
            None => row as u64 + 1,
        }
    }

    fn cell_text(&self, col: usize, row: usize) -> String {
        let columns = self.view.get_columns();
        let Some(column) = columns.get(col) else {
            return String::new();
        };
        match column.get(row) {
            Ok(AnyValue::Null) | Err(_) => String::new(),
            Ok(value) => value.to_string().trim_matches('"').to_string(),
        }
    }

    /// Draw a striped, virtualized grid with a leading `#` column.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;
        let row_height = text_height + 4.0;
        let n_cols = self.view.width();
        let n_rows = self.view.height();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(TableColumn::exact(40.0))
            .columns(TableColumn::initial(140.0).at_least(40.0), n_cols)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in self.view.get_column_names() {
                    header.col(|ui| {
                        ui.strong(name.to_string());
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, n_rows, |mut row| {
                    let row_index = row.index();
                    row.col(|ui| {
                        ui.label(self.row_number(row_index).to_string());
                    });
                    for col in 0..n_cols {
                        row.col(|ui| {
                            ui.label(self.cell_text(col, row_index));
                        });
                    }
                });
            });
    }
}
