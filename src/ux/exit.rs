//! Exit codes for the report tool.

use crate::model::Outcome;

/// Documented exit codes for `runreport`.
///
/// A successful run exits according to its overall outcome; anything that
/// stops a report from being produced at all exits with
/// [ExitCode::SETUP_ERROR].
pub enum ExitCode {}

impl ExitCode {
    /// The run's overall outcome was `info` or `passed`.
    pub const SUCCESS: i32 = 0;

    /// The run's overall outcome was `failed`.
    pub const FAILED: i32 = 1;

    /// The run's overall outcome was `error`.
    pub const ERROR: i32 = 2;

    /// No report could be produced, because of bad input or configuration.
    pub const SETUP_ERROR: i32 = 3;

    /// Gets the exit code for a run with overall outcome `outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::{model::Outcome, ux::exit::ExitCode};
    /// assert_eq!(ExitCode::for_outcome(Outcome::Info), 0);
    /// assert_eq!(ExitCode::for_outcome(Outcome::Passed), 0);
    /// assert_eq!(ExitCode::for_outcome(Outcome::Failed), 1);
    /// assert_eq!(ExitCode::for_outcome(Outcome::Error), 2);
    /// ```
    pub fn for_outcome(outcome: Outcome) -> i32 {
        match outcome {
            Outcome::Info | Outcome::Passed => Self::SUCCESS,
            Outcome::Failed => Self::FAILED,
            Outcome::Error => Self::ERROR,
        }
    }
}
