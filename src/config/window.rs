use super::traits::ConfigSection;
use crate::error::FourierError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fourier Series Generator - Created by ChromaticVizier and his cat.".to_string(),
            width: 570.0,
            height: 400.0,
            resizable: false,
        }
    }
}

impl ConfigSection for WindowConfig {
    fn section_name() -> &'static str {
        "window"
    }

    fn validate(&self) -> Result<(), FourierError> {
        if self.width < 200.0 || self.height < 150.0 {
            return Err(FourierError::Configuration(format!(
                "Window must be at least 200x150, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
