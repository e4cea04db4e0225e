pub mod generation;
pub mod validation;

pub use generation::PathGenerator;
pub use validation::InputValidator;
