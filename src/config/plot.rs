use super::traits::ConfigSection;
use crate::error::FourierError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub line_width: f32,
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Fourier Series Path".to_string(),
            line_width: 1.5,
            show_grid: true,
        }
    }
}

impl ConfigSection for PlotConfig {
    fn section_name() -> &'static str {
        "plot"
    }

    fn validate(&self) -> Result<(), FourierError> {
        if !(self.line_width > 0.0 && self.line_width <= 10.0) {
            return Err(FourierError::Configuration(
                "Line width must be between 0 and 10".to_string()
            ));
        }
        Ok(())
    }
}
