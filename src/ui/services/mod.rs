pub mod path_runner;

pub use path_runner::{NativeWarning, PathRunner, WarningSink};
