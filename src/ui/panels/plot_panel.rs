use crate::ui::state::AppState;
use egui_plot::{Line, Plot, PlotPoints};

pub struct PlotPanel;

impl PlotPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.vertical_centered(|ui| {
            ui.strong(&state.plot.title);
            if let Some(summary) = state.parameter_summary() {
                ui.small(summary);
            }
        });

        let Some(curve) = &state.curve else {
            ui.centered_and_justified(|ui| {
                ui.label("Enter parameters and click 'Generate Path'.");
            });
            return;
        };

        // Equal aspect so circles stay circles
        Plot::new("fourier_path_plot")
            .data_aspect(1.0)
            .show_grid(state.plot.show_grid)
            .show(ui, |plot_ui| {
                let points = PlotPoints::from(curve.points());
                plot_ui.line(Line::new("path", points).width(state.plot.line_width));
            });
    }
}
