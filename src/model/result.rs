//! The result tree: tests inside plans inside a run.
//!
//! Plan and run outcomes are derived, never supplied; the only way to get a
//! [PlanResult] or [RunReport] is through [crate::report::build], which
//! computes them.

use super::{logs::Log, notify::NotifyConfig, outcome::Outcome};
use indexmap::IndexMap;

/// The result of a single test, as supplied by whatever ran it.
///
/// Test results can't be changed once made:
///
/// ```compile_fail
/// use runreport::model::{Outcome, TestResult};
/// let mut t = TestResult::new("/test/one", Outcome::Failed, "one.log");
/// t.outcome = Outcome::Passed;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub(crate) id: String,
    pub(crate) outcome: Outcome,
    pub(crate) log: Log,
}

impl TestResult {
    /// Constructs a new test result.
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::model::{Log, Outcome, TestResult};
    /// let t = TestResult::new("/test/one", Outcome::Failed, "one.log");
    /// assert_eq!(t.id(), "/test/one");
    /// assert_eq!(t.outcome(), Outcome::Failed);
    /// assert_eq!(t.log(), &Log::from("one.log"));
    /// ```
    pub fn new(id: impl Into<String>, outcome: Outcome, log: impl Into<Log>) -> Self {
        Self {
            id: id.into(),
            outcome,
            log: log.into(),
        }
    }

    /// Gets the test's identifier, usually a path-like name such as
    /// `/test/one`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the outcome of the test.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Gets the log(s) the test produced.
    pub fn log(&self) -> &Log {
        &self.log
    }
}

/// A named group of test results, with their aggregate outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanResult {
    pub(crate) id: String,
    pub(crate) outcome: Outcome,
    pub(crate) tests: IndexMap<String, TestResult>,
}

impl PlanResult {
    /// Gets the plan's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the plan's aggregate outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Iterates over the plan's tests, in the order they were supplied.
    pub fn tests(&self) -> impl Iterator<Item = &TestResult> + '_ {
        self.tests.values()
    }

    /// Looks up a test by identifier.
    pub fn test(&self, id: &str) -> Option<&TestResult> {
        self.tests.get(id)
    }

    /// Gets the number of tests in this plan.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Gets whether this plan has no tests; never true of a built plan.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// The root of a result tree: every plan in a run, and the run's overall
/// outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub(crate) outcome: Outcome,
    pub(crate) plans: IndexMap<String, PlanResult>,
    pub(crate) notify: Option<NotifyConfig>,
}

impl RunReport {
    /// Gets the run's overall outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Iterates over the run's plans, in the order they were supplied.
    pub fn plans(&self) -> impl Iterator<Item = &PlanResult> + '_ {
        self.plans.values()
    }

    /// Looks up a plan by identifier.
    pub fn plan(&self, id: &str) -> Option<&PlanResult> {
        self.plans.get(id)
    }

    /// Gets the notification settings attached to this run, if any.
    pub fn notify(&self) -> Option<&NotifyConfig> {
        self.notify.as_ref()
    }

    /// Counts the tests in this run with each outcome.
    ///
    /// The counts come back in ascending outcome rank, and include outcomes
    /// that no test had.
    pub fn tally(&self) -> Vec<(Outcome, usize)> {
        let mut counts: Vec<(Outcome, usize)> = Outcome::all().map(|o| (o, 0)).collect();
        for test in self.plans().flat_map(PlanResult::tests) {
            if let Some((_, n)) = counts.iter_mut().find(|(o, _)| *o == test.outcome) {
                *n += 1;
            }
        }
        counts
    }
}
