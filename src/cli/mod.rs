//! Command Line Interface (CLI) layer.
//!
//! `args` defines argument parsing, `errors` the CLI error type, and `runner`
//! the single-file and batch flows built on `primitive_transform::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
