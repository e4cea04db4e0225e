use fourier_path::engines::validation::{InputValidator, MAX_TERM_COUNT};
use fourier_path::{FourierError, RawInputs};

fn valid() -> RawInputs {
    RawInputs::new("5", "42", "1.0", "1.0", "1.0")
}

#[test]
fn test_reference_inputs_accepted() {
    let params = InputValidator::validate(&valid()).unwrap();
    assert_eq!(params.term_count, 5);
    assert_eq!(params.seed, 42);
    assert_eq!(params.step_size, 1.0);
}

#[test]
fn test_non_numeric_term_count_rejected() {
    let inputs = RawInputs { term_count: "abc".to_string(), ..valid() };
    let err = InputValidator::validate(&inputs).unwrap_err();
    assert!(matches!(err, FourierError::InvalidInput { field: "term_count", .. }));
}

#[test]
fn test_fractional_term_count_rejected() {
    let inputs = RawInputs { term_count: "3.5".to_string(), ..valid() };
    assert!(InputValidator::validate(&inputs).is_err());

    let inputs = RawInputs { term_count: "3.0".to_string(), ..valid() };
    assert!(InputValidator::validate(&inputs).is_err());
}

#[test]
fn test_zero_decay_factor_rejected() {
    let inputs = RawInputs { decay_factor_1: "0".to_string(), ..valid() };
    let err = InputValidator::validate(&inputs).unwrap_err();
    assert!(matches!(err, FourierError::InvalidInput { field: "decay_factor_1", .. }));

    let inputs = RawInputs { decay_factor_2: "0.0".to_string(), ..valid() };
    assert!(InputValidator::validate(&inputs).is_err());
}

#[test]
fn test_non_positive_fields_rejected() {
    let cases = [
        RawInputs { term_count: "0".to_string(), ..valid() },
        RawInputs { term_count: "-3".to_string(), ..valid() },
        RawInputs { step_size: "0".to_string(), ..valid() },
        RawInputs { step_size: "-1".to_string(), ..valid() },
        RawInputs { decay_factor_1: "-0.5".to_string(), ..valid() },
        RawInputs { decay_factor_2: "-2".to_string(), ..valid() },
    ];

    for inputs in cases {
        let result = InputValidator::validate(&inputs);
        assert!(result.is_err(), "accepted {:?}", inputs);
    }
}

#[test]
fn test_fraction_notation_rejected() {
    let inputs = RawInputs { step_size: "1/2".to_string(), ..valid() };
    assert!(InputValidator::validate(&inputs).is_err());
}

#[test]
fn test_decimal_reals_accepted() {
    let inputs = RawInputs::new("12", "7", "1.25", "0.75", "0.5");
    let params = InputValidator::validate(&inputs).unwrap();
    assert_eq!(params.decay_factor_1, 1.25);
    assert_eq!(params.decay_factor_2, 0.75);
    assert_eq!(params.step_size, 0.5);
}

#[test]
fn test_huge_step_size_rejected() {
    for step_size in ["1e300", "1e6", "1000.001"] {
        let inputs = RawInputs { step_size: step_size.to_string(), ..valid() };
        let err = InputValidator::validate(&inputs).unwrap_err();
        assert!(matches!(err, FourierError::InvalidInput { field: "step_size", .. }));
    }
}

#[test]
fn test_huge_term_count_rejected() {
    let too_many = (MAX_TERM_COUNT + 1).to_string();
    for term_count in [too_many.as_str(), "100000000000", "99999999999999999999"] {
        let inputs = RawInputs { term_count: term_count.to_string(), ..valid() };
        assert!(InputValidator::validate(&inputs).is_err(), "accepted {}", term_count);
    }
}
