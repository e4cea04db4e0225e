pub mod traits;
pub mod window;
pub mod plot;
pub mod inputs;
pub mod manager;

pub use manager::{ConfigManager, AppConfig, DEFAULT_CONFIG_FILE};
pub use window::WindowConfig;
pub use plot::PlotConfig;
pub use inputs::InputDefaults;
pub use traits::ConfigSection;
