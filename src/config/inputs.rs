use super::traits::ConfigSection;
use crate::error::FourierError;
use crate::types::RawInputs;
use serde::{Deserialize, Serialize};

/// Initial text of the five input fields. Kept as text so a preset can be
/// anything the user could have typed; it is validated only on Generate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub term_count: String,
    pub seed: String,
    pub decay_factor_1: String,
    pub decay_factor_2: String,
    pub step_size: String,
}

impl InputDefaults {
    pub fn to_raw_inputs(&self) -> RawInputs {
        RawInputs::new(
            self.term_count.clone(),
            self.seed.clone(),
            self.decay_factor_1.clone(),
            self.decay_factor_2.clone(),
            self.step_size.clone(),
        )
    }
}

impl ConfigSection for InputDefaults {
    fn section_name() -> &'static str {
        "inputs"
    }

    fn validate(&self) -> Result<(), FourierError> {
        // Presets go through InputValidator when Generate is pressed
        Ok(())
    }
}
