use thiserror::Error;

#[derive(Error, Debug)]
pub enum FourierError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

impl FourierError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FourierError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FourierError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, FourierError>;
