//! Chart Window Widget
//! Secondary "Graph output" window holding the rendered figure.

use crate::charts::{ChartFigure, ChartPlotter};

/// Floating window for the current figure. Opens on a successful plot and
/// stays up until the user closes it or the view resets.
#[derive(Default)]
pub struct ChartWindow {
    open: bool,
    figure: Option<ChartFigure>,
}

impl ChartWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the figure and bring the window up.
    pub fn open_with(&mut self, figure: ChartFigure) {
        self.figure = Some(figure);
        self.open = true;
    }

    /// Drop the figure and close the window.
    pub fn clear(&mut self) {
        self.figure = None;
        self.open = false;
    }

    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(figure) = &self.figure else {
            return;
        };
        if !self.open {
            return;
        }

        egui::Window::new("Graph output")
            .open(&mut self.open)
            .resizable(true)
            .default_width(640.0)
            .default_height(420.0)
            .show(ctx, |ui| {
                ChartPlotter::draw(ui, figure);
            });
    }
}
