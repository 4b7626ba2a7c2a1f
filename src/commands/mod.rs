//! CLI command implementations.
//!
//! Each command lives in its own submodule with an options struct and an
//! `execute_*` entry point.

pub mod generate;
pub mod validate;

pub use generate::{execute_generate, GenerateOptions};
pub use validate::{execute_validate, ValidateOptions};
