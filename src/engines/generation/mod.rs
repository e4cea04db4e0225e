pub mod coefficients;
pub mod path_generator;

pub use path_generator::{sample_count, time_domain, PathGenerator, SAMPLES_PER_STEP};
