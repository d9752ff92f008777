//! User-facing parts of the report tool: command line, output, exit codes.

pub mod clap;
pub mod err;
pub mod exit;
pub mod out;

pub use err::{Error, Result};
