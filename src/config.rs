//! Configuration for the report tool.
//!
//! The library parts of runreport can be used without pulling in this
//! configuration layer, but it provides a convenient substrate for handling
//! the configuration.

pub mod empty;
pub mod err;
pub mod io;
pub mod top;

pub use err::{Error, Result};
pub use top::Config;
