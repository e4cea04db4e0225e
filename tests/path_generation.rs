use fourier_path::engines::generation::{sample_count, PathGenerator};
use fourier_path::{CoefficientSet, GenerationParameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_params() -> GenerationParameters {
    GenerationParameters {
        term_count: 5,
        seed: 42,
        decay_factor_1: 1.0,
        decay_factor_2: 1.0,
        step_size: 1.0,
    }
}

#[test]
fn test_reference_scenario() {
    let params = reference_params();
    let curve = PathGenerator::for_params(&params).generate(&params);

    assert_eq!(curve.x.len(), 1000);
    assert_eq!(curve.y.len(), 1000);
    assert!(curve.x.iter().chain(curve.y.iter()).all(|v| v.is_finite()));

    // t runs over a full period, so the path closes on itself
    assert!((curve.x[0] - curve.x[999]).abs() < 1e-9);
    assert!((curve.y[0] - curve.y[999]).abs() < 1e-9);
}

#[test]
fn test_same_seed_same_coefficients() {
    let first = CoefficientSet::draw(&mut StdRng::seed_from_u64(42), 8);
    let second = CoefficientSet::draw(&mut StdRng::seed_from_u64(42), 8);
    assert_eq!(first, second);

    let params = GenerationParameters { term_count: 8, ..reference_params() };
    let curve_a = PathGenerator::new(42).generate(&params);
    let curve_b = PathGenerator::new(42).generate(&params);
    assert_eq!(curve_a, curve_b);
}

#[test]
fn test_different_seeds_differ() {
    let params = reference_params();
    let curve_a = PathGenerator::new(1).generate(&params);
    let curve_b = PathGenerator::new(2).generate(&params);
    assert_ne!(curve_a, curve_b);
}

#[test]
fn test_negative_seed_is_reproducible() {
    let params = GenerationParameters { seed: -7, ..reference_params() };
    let curve_a = PathGenerator::for_params(&params).generate(&params);
    let curve_b = PathGenerator::for_params(&params).generate(&params);
    assert_eq!(curve_a, curve_b);
}

#[test]
fn test_length_follows_step_size() {
    for step_size in [0.002, 0.05, 0.25, 0.75, 1.5, 3.0] {
        let params = GenerationParameters { step_size, ..reference_params() };
        let curve = PathGenerator::for_params(&params).generate(&params);

        assert_eq!(curve.x.len(), sample_count(step_size));
        assert_eq!(curve.y.len(), curve.x.len());
    }
}

#[test]
fn test_tiny_step_size_gives_empty_curve() {
    let params = GenerationParameters { step_size: 0.0005, ..reference_params() };
    let curve = PathGenerator::for_params(&params).generate(&params);

    assert!(curve.is_empty());
    assert!(curve.points().is_empty());
}

#[test]
fn test_generate_with_matches_seeded_generator() {
    let params = reference_params();
    let mut rng = StdRng::seed_from_u64(42);
    let from_rng = PathGenerator::generate_with(&params, &mut rng);
    let from_seed = PathGenerator::new(42).generate(&params);
    assert_eq!(from_rng, from_seed);
}

#[test]
fn test_higher_decay_damps_harmonics() {
    let coefficients = CoefficientSet::draw(&mut StdRng::seed_from_u64(3), 40);
    let gentle = GenerationParameters { term_count: 40, decay_factor_1: 0.1, ..reference_params() };
    let steep = GenerationParameters { term_count: 40, decay_factor_1: 3.0, ..reference_params() };

    let rough = PathGenerator::evaluate(&gentle, &coefficients);
    let smooth = PathGenerator::evaluate(&steep, &coefficients);

    let total_variation = |xs: &[f64]| xs.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>();
    assert!(total_variation(&smooth.x[..]) < total_variation(&rough.x[..]));
    // y uses decay_factor_2, unchanged between the two
    assert_eq!(rough.y, smooth.y);
}
