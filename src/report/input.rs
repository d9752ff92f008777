//! Test results as handed over by whatever executed the tests.
//!
//! Input uses sequences rather than mappings, so that repeated identifiers
//! reach the builders (and get rejected) instead of silently overwriting
//! each other during parsing.

use super::{build, err};
use crate::{
    config::empty,
    model::{Log, NotifyConfig, Outcome, RunReport, TestResult},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every plan executed in a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    /// The plans, in execution order.
    #[serde(default)]
    pub plans: Vec<PlanInput>,
}

/// One executed plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanInput {
    /// The plan's identifier.
    pub name: String,
    /// The plan's tests, in execution order.
    #[serde(default)]
    pub tests: Vec<TestInput>,
}

/// One executed test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestInput {
    /// The test's identifier.
    pub name: String,
    /// The test's outcome.
    pub result: Outcome,
    /// The test's log(s); a test may have none.
    #[serde(default)]
    pub log: Log,
}

impl From<TestInput> for TestResult {
    fn from(t: TestInput) -> Self {
        TestResult::new(t.name, t.result, t.log)
    }
}

impl Input {
    /// Loads input from `path`.
    ///
    /// Files ending in `.toml` are read as TOML; anything else is read as
    /// JSON.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, err::LoadError> {
        let text = std::fs::read_to_string(path)?;
        let is_toml = path.extension().map_or(false, |e| e == "toml");
        log::debug!(
            "reading results from {} as {}",
            path.display(),
            if is_toml { "TOML" } else { "JSON" }
        );
        if is_toml {
            Ok(toml::from_str(&text)?)
        } else {
            Ok(serde_json::from_str(&text)?)
        }
    }

    /// Builds a run report from this input.
    ///
    /// `policy` decides what happens to plans with no tests before they
    /// reach the builders, and `notify` is attached to the report as-is.
    ///
    /// # Errors
    ///
    /// Fails with whatever error the builders raise.
    pub fn into_report(
        self,
        policy: empty::Policy,
        notify: Option<NotifyConfig>,
    ) -> err::Result<RunReport> {
        let plans = self
            .plans
            .into_iter()
            .filter(|p| policy.keep(p))
            .map(|p| build::plan(p.name, p.tests.into_iter().map(TestResult::from)))
            .collect::<err::Result<Vec<_>>>()?;
        build::run(plans, notify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Error;

    const JSON: &str = r#"{
        "plans": [
            {"name": "/plan/one", "tests": [
                {"name": "/test/one", "result": "passed", "log": "one.log"},
                {"name": "/test/two", "result": "failed", "log": ["two-a.log", "two-b.log"]}
            ]},
            {"name": "/plan/two", "tests": [
                {"name": "/test/three", "result": "info"}
            ]}
        ]
    }"#;

    const TOML: &str = r#"
        [[plans]]
        name = "/plan/one"

        [[plans.tests]]
        name = "/test/one"
        result = "passed"
        log = "one.log"

        [[plans.tests]]
        name = "/test/two"
        result = "failed"
        log = ["two-a.log", "two-b.log"]

        [[plans]]
        name = "/plan/two"

        [[plans.tests]]
        name = "/test/three"
        result = "info"
    "#;

    #[test]
    fn test_json_and_toml_agree() {
        let from_json: Input = serde_json::from_str(JSON).unwrap();
        let from_toml: Input = toml::from_str(TOML).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_into_report() {
        let input: Input = serde_json::from_str(JSON).unwrap();
        let report = input.into_report(empty::Policy::Reject, None).unwrap();
        assert_eq!(report.outcome(), Outcome::Failed);
        let three = report.plan("/plan/two").and_then(|p| p.test("/test/three"));
        assert_eq!(three.map(|t| t.log().is_empty()), Some(true));
    }

    fn with_empty_plan() -> Input {
        let mut input: Input = serde_json::from_str(JSON).unwrap();
        input.plans.push(PlanInput {
            name: "/plan/empty".to_owned(),
            tests: vec![],
        });
        input
    }

    #[test]
    fn test_empty_plan_rejected() {
        assert_eq!(
            with_empty_plan().into_report(empty::Policy::Reject, None),
            Err(Error::EmptyPlan {
                plan: "/plan/empty".to_owned()
            })
        );
    }

    #[test]
    fn test_empty_plan_omitted() {
        let report = with_empty_plan()
            .into_report(empty::Policy::Omit, None)
            .unwrap();
        assert!(report.plan("/plan/empty").is_none());
        assert_eq!(report.plans().count(), 2);
    }

    #[test]
    fn test_all_plans_omitted_is_still_empty_run() {
        let input = Input {
            plans: vec![PlanInput {
                name: "/plan/empty".to_owned(),
                tests: vec![],
            }],
        };
        assert_eq!(
            input.into_report(empty::Policy::Omit, None),
            Err(Error::EmptyRun)
        );
    }

    #[test]
    fn test_unknown_outcome_rejected() {
        let bad = JSON.replace("\"info\"", "\"skipped\"");
        assert!(serde_json::from_str::<Input>(&bad).is_err());
    }
}
