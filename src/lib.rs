pub mod config;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;

pub use error::{FourierError, Result};
pub use types::{CoefficientSet, Curve, GenerationParameters, RawInputs};
