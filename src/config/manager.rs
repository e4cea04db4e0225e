use super::{
    inputs::InputDefaults,
    plot::PlotConfig,
    traits::ConfigSection,
    window::WindowConfig,
};
use crate::error::FourierError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "fourier_path.toml";
pub const ENV_PREFIX: &str = "FOURIER_PATH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub plot: PlotConfig,
    pub inputs: InputDefaults,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FourierError> {
        self.window.validate()?;
        self.plot.validate()?;
        self.inputs.validate()?;
        Ok(())
    }
}

pub struct ConfigManager;

impl ConfigManager {
    /// Defaults, then the optional TOML file, then `FOURIER_PATH_*` variables
    /// (`__` separates section and key, e.g. `FOURIER_PATH_PLOT__TITLE`).
    pub fn load(path: Option<&Path>) -> Result<AppConfig, FourierError> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(file).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::finish(builder.build()?)
    }

    pub fn from_toml_str(contents: &str) -> Result<AppConfig, FourierError> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    /// Fall back to defaults when the sources are unreadable or invalid
    pub fn load_or_default(path: Option<&Path>) -> AppConfig {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                AppConfig::default()
            }
        }
    }

    fn finish(config: Config) -> Result<AppConfig, FourierError> {
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
