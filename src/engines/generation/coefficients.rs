use crate::types::CoefficientSet;
use rand::Rng;

impl CoefficientSet {
    /// Draw `term_count` cosine coefficients, then `term_count` sine coefficients,
    /// each uniform in [-1, 1). The draw order is part of the reproducibility contract.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, term_count: usize) -> Self {
        let cosine = (0..term_count).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let sine = (0..term_count).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self { cosine, sine }
    }
}
