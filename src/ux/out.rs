//! Endpoints for outputting a run report to the user.
//!
//! Generally, one will use [Choice] to make a selection (eg via command line)
//! of an [Outputter] to use, then instantiate it against a writer, then output
//! through it.

pub mod abs;
pub mod choice;
pub mod color;
pub mod err;
pub mod json;
pub mod summary;

pub use abs::Outputter;
pub use choice::{Choice, Config, Outputtable, Target};
pub use color::Color;
pub use err::{Error, Result};
