pub mod input_validator;

pub use input_validator::{
    InputValidator, INVALID_INPUT_MESSAGE, INVALID_INPUT_TITLE, MAX_SAMPLE_COUNT, MAX_TERM_COUNT,
};
