//! The report document: a serialisable projection of a [RunReport].
//!
//! The document looks like this (shown as YAML for brevity; we write JSON):
//!
//! ```text
//! result: failed
//! plans:
//!   /plan/one:
//!     result: failed
//!     tests:
//!       /test/one:
//!         result: passed
//!         log: logs/one.log
//!       /test/two:
//!         result: failed
//!         log: [logs/two-a.log, logs/two-b.log]
//! notify:
//!   email: [dev@example.org]
//! ```

use super::{build, err};
use crate::model::{Log, NotifyConfig, Outcome, PlanResult, RunReport, TestResult};
use indexmap::IndexMap;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::{fmt, marker::PhantomData};

/// The top level of a report document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// The overall outcome of the run.
    pub result: Outcome,
    /// Each plan, keyed by identifier, in run order.
    #[serde(deserialize_with = "unique_keys")]
    pub plans: IndexMap<String, Plan>,
    /// Notification settings for downstream dispatchers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyConfig>,
}

/// A plan entry in a report document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    /// The aggregate outcome of the plan.
    pub result: Outcome,
    /// Each test, keyed by identifier, in plan order.
    #[serde(deserialize_with = "unique_keys")]
    pub tests: IndexMap<String, Test>,
}

/// A test entry in a report document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Test {
    /// The outcome of the test.
    pub result: Outcome,
    /// The test's log path, or paths.
    pub log: Log,
}

impl Document {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::MalformedReport] if the string isn't JSON, or
    /// doesn't have the shape of a report document.
    pub fn from_json(s: &str) -> err::Result<Self> {
        serde_json::from_str(s).map_err(malformed)
    }

    /// Converts a generic JSON value into a document.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::MalformedReport] if `value` doesn't have the
    /// shape of a report document.
    pub fn from_value(value: serde_json::Value) -> err::Result<Self> {
        serde_json::from_value(value).map_err(malformed)
    }

    /// Dumps this document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails if a log path can't be represented as a string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn malformed(e: serde_json::Error) -> err::Error {
    err::Error::MalformedReport(e.to_string())
}

/// Projects a run report into a document.
///
/// Nothing is recomputed; outcomes are copied across as they are, and every
/// mapping keeps its order.
pub fn serialize(report: &RunReport) -> Document {
    Document {
        result: report.outcome(),
        plans: report
            .plans()
            .map(|p| (p.id().to_owned(), serialize_plan(p)))
            .collect(),
        notify: report.notify().cloned(),
    }
}

fn serialize_plan(plan: &PlanResult) -> Plan {
    Plan {
        result: plan.outcome(),
        tests: plan
            .tests()
            .map(|t| {
                (
                    t.id.clone(),
                    Test {
                        result: t.outcome,
                        log: t.log.clone(),
                    },
                )
            })
            .collect(),
    }
}

/// Reads a run report back out of a document.
///
/// The report is rebuilt from its tests upwards, and every stated `result`
/// must agree with what the rebuild computes.
///
/// # Errors
///
/// Fails with [err::Error::MalformedReport] if a plan or the run has no
/// children, or if any stated outcome disagrees with its children.
pub fn deserialize(doc: Document) -> err::Result<RunReport> {
    let plans = doc
        .plans
        .into_iter()
        .map(|(id, plan)| deserialize_plan(id, plan))
        .collect::<err::Result<Vec<_>>>()?;
    let report = build::run(plans, doc.notify).map_err(explain)?;
    check_result("run", doc.result, report.outcome())?;
    Ok(report)
}

fn deserialize_plan(id: String, plan: Plan) -> err::Result<PlanResult> {
    let tests = plan.tests.into_iter().map(|(id, test)| TestResult {
        id,
        outcome: test.result,
        log: test.log,
    });
    let built = build::plan(id, tests).map_err(explain)?;
    check_result(&format!("plan '{}'", built.id()), plan.result, built.outcome())?;
    Ok(built)
}

fn check_result(what: &str, stated: Outcome, computed: Outcome) -> err::Result<()> {
    if stated == computed {
        Ok(())
    } else {
        Err(err::Error::MalformedReport(format!(
            "{} claims result '{}', but its contents give '{}'",
            what, stated, computed
        )))
    }
}

/// Build errors in a document are the document's fault.
fn explain(e: err::Error) -> err::Error {
    match e {
        err::Error::MalformedReport(_) => e,
        e => err::Error::MalformedReport(e.to_string()),
    }
}

/// Deserializes a mapping, rejecting repeated keys rather than letting the
/// last one win.
fn unique_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
}

struct UniqueKeysVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
    type Value = IndexMap<String, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping from identifiers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if map.contains_key(&key) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate identifier: {}",
                    key
                )));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}
