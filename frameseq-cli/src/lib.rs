//! frameseq CLI library
//!
//! This library provides the `lss` command-line interface on top of
//! the frameseq-core sequence detection engine.

pub mod error;
pub mod input;
pub mod output;
pub mod sort;
pub mod walk;

pub use error::{CliError, CliResult};
