//! Errors that can occur while handling the command line.
use std::convert::Infallible;

use super::out;
use crate::{config, report};
use thiserror::Error;

/// A command-line error.
#[derive(Debug, Error)]
pub enum Error {
    /// The user supplied bad configuration on the command line.
    #[error("config error")]
    Config(#[from] config::Error),

    /// The user supplied bad output options on the command line.
    #[error("output error")]
    Output(#[from] out::Error),

    /// We couldn't load the test results.
    #[error("couldn't load results")]
    Load(#[from] report::LoadError),

    /// We couldn't build or read the report.
    #[error("report error")]
    Report(#[from] report::Error),

    /// We expected an input file, but none was given.
    #[error("no input given")]
    NoInput,
}

impl From<Infallible> for Error {
    fn from(i: Infallible) -> Self {
        match i {}
    }
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
