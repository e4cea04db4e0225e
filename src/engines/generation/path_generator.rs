use crate::types::{CoefficientSet, Curve, GenerationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

pub const SAMPLES_PER_STEP: f64 = 1000.0;

/// floor(1000 * step_size); no lower clamp, so tiny steps give 0 or 1 samples
pub fn sample_count(step_size: f64) -> usize {
    (SAMPLES_PER_STEP * step_size).floor() as usize
}

/// `count` evenly spaced samples covering [0, 2π], both ends included
pub fn time_domain(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = TAU / (count - 1) as f64;
            (0..count).map(|i| step * i as f64).collect()
        }
    }
}

/// Owns the random source for one request; seeded locally, never shared
pub struct PathGenerator {
    rng: StdRng,
}

impl PathGenerator {
    pub fn new(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    pub fn for_params(params: &GenerationParameters) -> Self {
        Self::new(params.seed)
    }

    pub fn generate(&mut self, params: &GenerationParameters) -> Curve {
        Self::generate_with(params, &mut self.rng)
    }

    /// Evaluate the two harmonic sums with coefficients drawn from `rng`
    pub fn generate_with<R: Rng + ?Sized>(params: &GenerationParameters, rng: &mut R) -> Curve {
        let coefficients = CoefficientSet::draw(rng, params.term_count);
        let curve = Self::evaluate(params, &coefficients);

        log::debug!(
            "Generated {} samples from {} harmonics (seed {})",
            curve.len(),
            params.term_count,
            params.seed
        );

        curve
    }

    pub fn evaluate(params: &GenerationParameters, coefficients: &CoefficientSet) -> Curve {
        let t = time_domain(sample_count(params.step_size));
        let mut x = vec![0.0; t.len()];
        let mut y = vec![0.0; t.len()];

        for (idx, (&a, &b)) in coefficients
            .cosine
            .iter()
            .zip(coefficients.sine.iter())
            .enumerate()
        {
            let n = (idx + 1) as f64;
            let x_scale = n.powf(params.decay_factor_1);
            let y_scale = n.powf(params.decay_factor_2);

            for (i, &ti) in t.iter().enumerate() {
                let (sin, cos) = (n * ti).sin_cos();
                x[i] += (a * cos + b * sin) / x_scale;
                y[i] += (a * sin - b * cos) / y_scale;
            }
        }

        Curve { x, y }
    }
}
