use super::panels::{ControlPanel, PlotPanel};
use super::services::{NativeWarning, PathRunner};
use super::state::AppState;
use crate::config::AppConfig;

pub struct FourierPathApp {
    state: AppState,
    control_panel: ControlPanel,
    plot_panel: PlotPanel,
}

impl Default for FourierPathApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl FourierPathApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            control_panel: ControlPanel::new(),
            plot_panel: PlotPanel::new(),
        }
    }
}

impl eframe::App for FourierPathApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left Panel - Inputs
        let generate = egui::SidePanel::left("control_panel")
            .exact_width(170.0)
            .resizable(false)
            .show(ctx, |ui| self.control_panel.show(ui, &mut self.state))
            .inner;

        if generate {
            if let Err(e) = PathRunner::run(&mut self.state, &mut NativeWarning) {
                // Already shown in the warning dialog; the previous plot stays
                log::debug!("Generate request ended with: {}", e);
            }
        }

        // Central Panel - Curve
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_panel.show(ui, &self.state);
        });
    }
}
