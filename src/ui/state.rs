use crate::config::{AppConfig, PlotConfig};
use crate::types::{Curve, GenerationParameters, RawInputs};

/// Central application state for the UI
pub struct AppState {
    // Input fields, edited in place by the control panel
    pub inputs: RawInputs,

    // Last accepted request and its result
    pub last_params: Option<GenerationParameters>,
    pub curve: Option<Curve>,

    pub plot: PlotConfig,
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            inputs: config.inputs.to_raw_inputs(),
            last_params: None,
            curve: None,
            plot: config.plot.clone(),
            status_message: "Ready".to_string(),
        }
    }

    /// Caption for the plotted curve, e.g. "n = 5, seed = 42, d1 = 1, d2 = 1.5"
    pub fn parameter_summary(&self) -> Option<String> {
        self.last_params.map(|p| {
            format!(
                "n = {}, seed = {}, d1 = {}, d2 = {}",
                p.term_count, p.seed, p.decay_factor_1, p.decay_factor_2
            )
        })
    }
}
