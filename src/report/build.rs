//! Building plan and run results out of their children.
//!
//! Both builders are thin wrappers over [aggregate::reduce]; what they add is
//! identifier checking and errors that say which level of the tree was
//! empty.

use super::err::{Error, Result, Scope};
use crate::model::{aggregate, NotifyConfig, PlanResult, RunReport, TestResult};
use indexmap::{map::Entry, IndexMap};

/// Builds a plan result called `id` from `tests`, in the order given.
///
/// # Errors
///
/// Fails with [Error::EmptyPlan] if `tests` is empty, and with
/// [Error::DuplicateIdentifier] if two tests share an identifier.
///
/// # Examples
///
/// ```
/// use runreport::{model::{Outcome, TestResult}, report::build};
///
/// let plan = build::plan("/plan/smoke", vec![
///     TestResult::new("/test/one", Outcome::Info, "one.log"),
///     TestResult::new("/test/two", Outcome::Passed, "two.log"),
/// ]).unwrap();
/// assert_eq!(plan.outcome(), Outcome::Passed);
/// ```
pub fn plan(id: impl Into<String>, tests: impl IntoIterator<Item = TestResult>) -> Result<PlanResult> {
    let id = id.into();
    let tests = unique(tests, |t| &t.id, || Scope::Plan(id.clone()))?;
    let outcome = aggregate::reduce(tests.values().map(|t| t.outcome))
        .map_err(|_| Error::EmptyPlan { plan: id.clone() })?;
    log::debug!("plan '{}': {} test(s), outcome {}", id, tests.len(), outcome);
    Ok(PlanResult { id, outcome, tests })
}

/// Builds a run report from `plans`, in the order given, attaching `notify`
/// unchanged.
///
/// # Errors
///
/// Fails with [Error::EmptyRun] if `plans` is empty, and with
/// [Error::DuplicateIdentifier] if two plans share an identifier.
pub fn run(
    plans: impl IntoIterator<Item = PlanResult>,
    notify: Option<NotifyConfig>,
) -> Result<RunReport> {
    let plans = unique(plans, |p| &p.id, || Scope::Run)?;
    let outcome = aggregate::reduce(plans.values().map(PlanResult::outcome))
        .map_err(|_| Error::EmptyRun)?;
    log::debug!("run: {} plan(s), outcome {}", plans.len(), outcome);
    Ok(RunReport {
        outcome,
        plans,
        notify,
    })
}

/// Collects `items` into an insertion-ordered map keyed on `key`, failing on
/// the first repeated key.
fn unique<T>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> &String,
    scope: impl FnOnce() -> Scope,
) -> Result<IndexMap<String, T>> {
    let mut map = IndexMap::new();
    for item in items {
        match map.entry(key(&item).clone()) {
            Entry::Occupied(e) => {
                return Err(Error::DuplicateIdentifier {
                    scope: scope(),
                    id: e.key().clone(),
                })
            }
            Entry::Vacant(e) => {
                e.insert(item);
            }
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Log, Outcome};

    fn test(id: &str, outcome: Outcome) -> TestResult {
        TestResult::new(id, outcome, format!("logs{}.log", id).as_str())
    }

    #[test]
    fn test_plan_outcome_is_reduced() {
        let p = plan(
            "/plan/one",
            vec![
                test("/test/one", Outcome::Info),
                test("/test/two", Outcome::Passed),
                test("/test/three", Outcome::Failed),
            ],
        )
        .unwrap();
        assert_eq!(p.outcome(), Outcome::Failed);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_plan_keeps_test_order() {
        let p = plan(
            "/plan/one",
            vec![
                test("/test/zz", Outcome::Passed),
                test("/test/aa", Outcome::Passed),
                test("/test/mm", Outcome::Passed),
            ],
        )
        .unwrap();
        let ids: Vec<&str> = p.tests().map(TestResult::id).collect();
        assert_eq!(ids, vec!["/test/zz", "/test/aa", "/test/mm"]);
    }

    #[test]
    fn test_plan_build_idempotent() {
        let tests = vec![
            TestResult::new("/test/one", Outcome::Passed, Log::from_paths(vec!["a", "b"])),
            test("/test/two", Outcome::Error),
        ];
        let first = plan("/plan/one", tests.clone()).unwrap();
        let second = plan("/plan/one", tests).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.outcome(), Outcome::Error);
    }

    #[test]
    fn test_plan_empty() {
        assert_eq!(
            plan("/plan/empty", vec![]),
            Err(Error::EmptyPlan {
                plan: "/plan/empty".to_owned()
            })
        );
    }

    #[test]
    fn test_plan_duplicate_test() {
        let got = plan(
            "/plan/one",
            vec![
                test("/test/one", Outcome::Passed),
                test("/test/one", Outcome::Failed),
            ],
        );
        assert_eq!(
            got,
            Err(Error::DuplicateIdentifier {
                scope: Scope::Plan("/plan/one".to_owned()),
                id: "/test/one".to_owned(),
            })
        );
    }

    #[test]
    fn test_run_outcome_is_reduced() {
        let p1 = plan(
            "/plan/one",
            vec![test("/test/a", Outcome::Passed), test("/test/b", Outcome::Failed)],
        )
        .unwrap();
        let p2 = plan("/plan/two", vec![test("/test/c", Outcome::Info)]).unwrap();
        let r = run(vec![p1, p2], None).unwrap();
        assert_eq!(r.outcome(), Outcome::Failed);
        assert_eq!(r.plan("/plan/two").map(PlanResult::outcome), Some(Outcome::Info));
        assert!(r.notify().is_none());
    }

    #[test]
    fn test_run_attaches_notify_unchanged() {
        let mut notify = NotifyConfig::new();
        notify.insert("email", serde_json::json!(["dev@example.org"]));
        let p = plan("/plan/one", vec![test("/test/a", Outcome::Passed)]).unwrap();
        let r = run(vec![p], Some(notify.clone())).unwrap();
        assert_eq!(r.notify(), Some(&notify));
    }

    #[test]
    fn test_run_empty() {
        assert_eq!(run(vec![], None), Err(Error::EmptyRun));
    }

    #[test]
    fn test_run_duplicate_plan() {
        let p = plan("/plan/one", vec![test("/test/a", Outcome::Passed)]).unwrap();
        let got = run(vec![p.clone(), p], None);
        assert_eq!(
            got,
            Err(Error::DuplicateIdentifier {
                scope: Scope::Run,
                id: "/plan/one".to_owned(),
            })
        );
    }
}
