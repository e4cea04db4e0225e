use serde::{Deserialize, Serialize};

/// The five text fields exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub term_count: String,
    pub seed: String,
    pub decay_factor_1: String,
    pub decay_factor_2: String,
    pub step_size: String,
}

impl RawInputs {
    pub fn new(
        term_count: impl Into<String>,
        seed: impl Into<String>,
        decay_factor_1: impl Into<String>,
        decay_factor_2: impl Into<String>,
        step_size: impl Into<String>,
    ) -> Self {
        Self {
            term_count: term_count.into(),
            seed: seed.into(),
            decay_factor_1: decay_factor_1.into(),
            decay_factor_2: decay_factor_2.into(),
            step_size: step_size.into(),
        }
    }
}

/// Validated inputs for one generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub term_count: usize,
    pub seed: i64,
    pub decay_factor_1: f64,  // Exponent applied to x harmonics
    pub decay_factor_2: f64,  // Exponent applied to y harmonics
    pub step_size: f64,       // 1000 * step_size samples
}

/// Random Fourier coefficients, one pair per harmonic
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    pub cosine: Vec<f64>,
    pub sine: Vec<f64>,
}

impl CoefficientSet {
    pub fn term_count(&self) -> usize {
        self.cosine.len()
    }
}

/// Sampled parametric curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}
