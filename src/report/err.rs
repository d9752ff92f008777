//! Errors that can occur while building, reading, or loading reports.
use crate::model::aggregate::EmptyInputError;
use std::fmt::Display;
use thiserror::Error;

/// The scope in which an identifier must be unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Test identifiers must be unique within the named plan.
    Plan(String),
    /// Plan identifiers must be unique within a run.
    Run,
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan(plan) => write!(f, "test in plan '{}'", plan),
            Self::Run => f.write_str("plan in run"),
        }
    }
}

/// A report building or reading error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Something asked to reduce no outcomes at all.
    ///
    /// The builders catch this case themselves, so seeing it means a bug.
    #[error("internal error: {0}")]
    EmptyInput(#[from] EmptyInputError),

    /// A plan had no tests.
    #[error("plan '{plan}' ran zero tests")]
    EmptyPlan {
        /// The identifier of the empty plan.
        plan: String,
    },

    /// A run had no plans.
    #[error("run contains zero plans")]
    EmptyRun,

    /// Two siblings in the result tree share an identifier.
    #[error("duplicate {scope} identifier: {id}")]
    DuplicateIdentifier {
        /// Where the duplicate occurred.
        scope: Scope,
        /// The duplicated identifier.
        id: String,
    },

    /// A report document was missing data, or had data of the wrong shape.
    #[error("malformed report: {0}")]
    MalformedReport(String),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// An error loading test results handed over by a test executor.
#[derive(Debug, Error)]
pub enum LoadError {
    /// We couldn't read the input.
    #[error("couldn't read results")]
    Io(#[from] std::io::Error),

    /// We couldn't parse the input as JSON.
    #[error("couldn't parse results as JSON")]
    Json(#[from] serde_json::Error),

    /// We couldn't parse the input as TOML.
    #[error("couldn't parse results as TOML")]
    Toml(#[from] toml::de::Error),
}
