//! Menu Panel Widget
//! Left side panel walking the user through a menu choice and its inputs.

use crate::data::ChartKind;
use egui::{Color32, ComboBox, RichText};

/// Top-level menu modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    DataInColumn,
    BrowseData,
    PlotGraph,
}

impl MenuMode {
    pub const ALL: [MenuMode; 3] = [
        MenuMode::DataInColumn,
        MenuMode::BrowseData,
        MenuMode::PlotGraph,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuMode::DataInColumn => "Data in column",
            MenuMode::BrowseData => "Browse data",
            MenuMode::PlotGraph => "Plot graph",
        }
    }
}

/// Pending user choices for the current mode.
#[derive(Default, Clone)]
pub struct MenuSettings {
    pub column: String,
    pub rows_input: String,
    pub chart_kind: Option<ChartKind>,
    pub value_col: String,
    pub scatter_x: String,
    pub scatter_y: String,
}

impl MenuSettings {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Actions the panel hands back to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    ModeChanged,
    ColumnChosen,
    ShowRows,
    ShowChart,
    Reset,
    Exit,
}

/// Left side menu panel with the mode selector and per-mode inputs.
pub struct MenuPanel {
    pub mode: MenuMode,
    pub settings: MenuSettings,
    pub columns: Vec<String>,
    pub status: String,
}

impl MenuPanel {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            mode: MenuMode::BrowseData,
            settings: MenuSettings::default(),
            columns,
            status: String::new(),
        }
    }

    /// Draw the panel. Returns at most one action per frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> MenuAction {
        let mut action = MenuAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 FilmLens")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Film dataset explorer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Menu Section =====
        ui.label(RichText::new("Menu").size(14.0).strong());
        ui.add_space(5.0);

        for mode in MenuMode::ALL {
            if ui
                .selectable_label(self.mode == mode, mode.label())
                .clicked()
                && self.mode != mode
            {
                self.mode = mode;
                self.settings.clear();
                action = MenuAction::ModeChanged;
            }
        }
        if ui.selectable_label(false, "Exit").clicked() {
            action = MenuAction::Exit;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        match self.mode {
            MenuMode::DataInColumn => self.show_data_in_column(ui, &mut action),
            MenuMode::BrowseData => self.show_browse_data(ui, &mut action),
            MenuMode::PlotGraph => self.show_plot_graph(ui, &mut action),
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }

    fn show_data_in_column(&mut self, ui: &mut egui::Ui, action: &mut MenuAction) {
        ui.label("Which column would you like to select?");
        ui.add_space(5.0);

        ComboBox::from_id_salt("column")
            .width(180.0)
            .selected_text(&self.settings.column)
            .show_ui(ui, |ui| {
                for col in &self.columns {
                    if ui
                        .selectable_label(self.settings.column == *col, col)
                        .clicked()
                    {
                        self.settings.column = col.clone();
                        // live update, no confirm button
                        *action = MenuAction::ColumnChosen;
                    }
                }
            });

        ui.add_space(10.0);
        if ui.button("Click to reset").clicked() {
            *action = MenuAction::Reset;
        }
    }

    fn show_browse_data(&mut self, ui: &mut egui::Ui, action: &mut MenuAction) {
        ui.label("Which title's number(s) do you want to browse?");
        ui.label(RichText::new("ex. 1,2,3,4 or 1-9").size(11.0).color(Color32::GRAY));
        ui.add_space(5.0);

        ui.text_edit_singleline(&mut self.settings.rows_input);

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Click to show").clicked() {
                *action = MenuAction::ShowRows;
            }
            if ui.button("Click to reset").clicked() {
                *action = MenuAction::Reset;
            }
        });
    }

    fn show_plot_graph(&mut self, ui: &mut egui::Ui, action: &mut MenuAction) {
        ui.label("Choose graph type.");
        ui.add_space(5.0);

        let kind_text = self
            .settings
            .chart_kind
            .map(|kind| kind.label())
            .unwrap_or_default();
        ComboBox::from_id_salt("chart_kind")
            .width(180.0)
            .selected_text(kind_text)
            .show_ui(ui, |ui| {
                for kind in ChartKind::ALL {
                    if ui
                        .selectable_label(self.settings.chart_kind == Some(kind), kind.label())
                        .clicked()
                        && self.settings.chart_kind != Some(kind)
                    {
                        // switching kind drops the parameters picked for the old one
                        self.settings.clear();
                        self.settings.chart_kind = Some(kind);
                    }
                }
            });

        let Some(kind) = self.settings.chart_kind else {
            return;
        };

        ui.add_space(10.0);
        match kind {
            ChartKind::Scatter => {
                ui.label("What do you want to plot? (x, y axis):");
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ComboBox::from_id_salt("scatter_x")
                        .width(110.0)
                        .selected_text(&self.settings.scatter_x)
                        .show_ui(ui, |ui| {
                            for col in &self.columns {
                                if ui
                                    .selectable_label(self.settings.scatter_x == *col, col)
                                    .clicked()
                                {
                                    self.settings.scatter_x = col.clone();
                                }
                            }
                        });
                    ComboBox::from_id_salt("scatter_y")
                        .width(110.0)
                        .selected_text(&self.settings.scatter_y)
                        .show_ui(ui, |ui| {
                            for col in kind.value_columns() {
                                if ui
                                    .selectable_label(self.settings.scatter_y == *col, *col)
                                    .clicked()
                                {
                                    self.settings.scatter_y = col.to_string();
                                }
                            }
                        });
                });
            }
            _ => {
                ui.label("What do you want to plot?");
                ui.add_space(5.0);
                ComboBox::from_id_salt("value_col")
                    .width(180.0)
                    .selected_text(&self.settings.value_col)
                    .show_ui(ui, |ui| {
                        for col in kind.value_columns() {
                            if ui
                                .selectable_label(self.settings.value_col == *col, *col)
                                .clicked()
                            {
                                self.settings.value_col = col.to_string();
                            }
                        }
                    });
            }
        }

        ui.add_space(10.0);
        ui.label("Which title's number(s) do you want to plot?");
        ui.label(RichText::new("ex. 1,2,3,4 or 1-9").size(11.0).color(Color32::GRAY));
        ui.add_space(5.0);
        ui.text_edit_singleline(&mut self.settings.rows_input);

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Click to show").clicked() {
                *action = MenuAction::ShowChart;
            }
            if ui.button("Click to reset").clicked() {
                *action = MenuAction::Reset;
            }
        });
    }
}
