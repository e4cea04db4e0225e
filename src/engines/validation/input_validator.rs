use crate::engines::generation::sample_count;
use crate::error::{FourierError, Result};
use crate::types::{GenerationParameters, RawInputs};

/// Upper bounds keep one request's allocation and work bounded
pub const MAX_TERM_COUNT: usize = 10_000;
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

pub const INVALID_INPUT_TITLE: &str = "Invalid Input";
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid positive numbers.\nFractions are not allowed, please enter decimals.";

pub struct InputValidator;

impl InputValidator {
    /// Parse the five text fields and enforce positivity on everything but the seed
    pub fn validate(inputs: &RawInputs) -> Result<GenerationParameters> {
        let term_count = Self::parse_integer("term_count", &inputs.term_count)?;
        let seed = Self::parse_integer("seed", &inputs.seed)?;
        let decay_factor_1 = Self::parse_real("decay_factor_1", &inputs.decay_factor_1)?;
        let decay_factor_2 = Self::parse_real("decay_factor_2", &inputs.decay_factor_2)?;
        let step_size = Self::parse_real("step_size", &inputs.step_size)?;

        if term_count <= 0 {
            return Err(FourierError::invalid("term_count", "must be greater than zero"));
        }
        Self::require_positive("step_size", step_size)?;
        Self::require_positive("decay_factor_1", decay_factor_1)?;
        Self::require_positive("decay_factor_2", decay_factor_2)?;

        let term_count = usize::try_from(term_count)
            .ok()
            .filter(|&n| n <= MAX_TERM_COUNT)
            .ok_or_else(|| {
                FourierError::invalid("term_count", format!("must be at most {}", MAX_TERM_COUNT))
            })?;

        if sample_count(step_size) > MAX_SAMPLE_COUNT {
            return Err(FourierError::invalid(
                "step_size",
                format!("gives more than {} samples", MAX_SAMPLE_COUNT),
            ));
        }

        Ok(GenerationParameters {
            term_count,
            seed,
            decay_factor_1,
            decay_factor_2,
            step_size,
        })
    }

    /// Integers only; "3.5" and "3e2" are rejected even though they are numeric
    fn parse_integer(field: &'static str, text: &str) -> Result<i64> {
        let text = text.trim();
        text.parse::<i64>()
            .map_err(|e| FourierError::invalid(field, format!("'{}' is not an integer ({})", text, e)))
    }

    fn parse_real(field: &'static str, text: &str) -> Result<f64> {
        let text = text.trim();
        let value = text
            .parse::<f64>()
            .map_err(|e| FourierError::invalid(field, format!("'{}' is not a number ({})", text, e)))?;

        if !value.is_finite() {
            return Err(FourierError::invalid(field, format!("'{}' is not finite", text)));
        }
        Ok(value)
    }

    fn require_positive(field: &'static str, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(FourierError::invalid(
                field,
                format!("must be greater than zero, got {}", value),
            ));
        }
        Ok(())
    }
}
