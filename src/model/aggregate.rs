//! Reduction of many outcomes into one.
//!
//! The same reduction applies at every level of the result tree: tests into
//! plans, and plans into runs.

use super::outcome::Outcome;
use thiserror::Error;

/// Error raised when reducing an empty collection of outcomes.
///
/// There is no sensible default outcome for nothing, so it is up to callers
/// to decide what an empty plan or run means before reducing.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot reduce an empty collection of outcomes")]
pub struct EmptyInputError;

/// Reduces `outcomes` to the single most severe outcome among them.
///
/// The result depends only on which outcomes are present, never on their
/// order.
///
/// # Errors
///
/// Fails with [EmptyInputError] if `outcomes` is empty.
///
/// # Examples
///
/// ```
/// use runreport::model::{aggregate::reduce, Outcome::*};
/// assert_eq!(reduce(vec![Info, Passed, Passed]), Ok(Passed));
/// assert_eq!(reduce(vec![Info, Passed, Failed]), Ok(Failed));
/// assert_eq!(reduce(vec![Failed, Error, Passed]), Ok(Error));
/// assert!(reduce(vec![]).is_err());
/// ```
pub fn reduce(outcomes: impl IntoIterator<Item = Outcome>) -> Result<Outcome, EmptyInputError> {
    outcomes.into_iter().max().ok_or(EmptyInputError)
}
