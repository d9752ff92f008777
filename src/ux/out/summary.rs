//! The summary outputter.

use super::{abs::Outputter, err};
use crate::model::{Log, Outcome, PlanResult, RunReport, TestResult};
use colored::Colorize;
use std::io::{self, Write};

/// An outputter that tabulates each plan and test with its outcome.
pub struct Summary<W> {
    w: tabwriter::TabWriter<W>,
}

impl<W: Write> Outputter for Summary<W> {
    fn output(mut self: Box<Self>, report: &RunReport) -> err::Result<()> {
        for plan in report.plans() {
            self.dump_plan(plan)?;
        }
        self.dump_total(report)?;
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Summary<W> {
    /// Constructs a new summary writer.
    pub fn new(writer: W) -> Self {
        Self {
            w: tabwriter::TabWriter::new(writer).padding(1),
        }
    }

    fn dump_plan(&mut self, plan: &PlanResult) -> io::Result<()> {
        writeln!(
            self.w,
            "{result}\t{id}\t",
            result = paint(plan.outcome()),
            id = plan.id().bold(),
        )?;
        for test in plan.tests() {
            self.dump_test(test)?;
        }
        Ok(())
    }

    fn dump_test(&mut self, test: &TestResult) -> io::Result<()> {
        writeln!(
            self.w,
            "  {result}\t{id}\t{log}",
            result = paint(test.outcome()),
            id = test.id(),
            log = stringify_log(test.log()),
        )
    }

    fn dump_total(&mut self, report: &RunReport) -> io::Result<()> {
        let counts = report
            .tally()
            .into_iter()
            .map(|(outcome, n)| format!("{} {}", n, outcome))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            self.w,
            "\nresult: {} ({})",
            paint(report.outcome()),
            counts
        )
    }
}

/// Colours an outcome's name by severity.
fn paint(outcome: Outcome) -> colored::ColoredString {
    let name = outcome.to_string();
    match outcome {
        Outcome::Info => name.blue(),
        Outcome::Passed => name.green(),
        Outcome::Failed => name.red(),
        Outcome::Error => name.magenta().bold(),
    }
}

/// Converts a log reference to a comma-separated string of paths.
fn stringify_log(log: &Log) -> String {
    log.paths()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build;

    #[test]
    fn test_summary_lists_everything() {
        colored::control::set_override(false);
        let plan = build::plan(
            "/plan/one",
            vec![
                TestResult::new("/test/one", Outcome::Passed, "one.log"),
                TestResult::new("/test/two", Outcome::Failed, Log::from_paths(vec!["a.log", "b.log"])),
            ],
        )
        .unwrap();
        let r = build::run(vec![plan], None).unwrap();

        let mut buf: Vec<u8> = vec![];
        Box::new(Summary::new(&mut buf)).output(&r).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("/plan/one"));
        assert!(text.contains("/test/two"));
        assert!(text.contains("a.log, b.log"));
        assert!(text.contains("result: failed (0 info, 1 passed, 1 failed, 0 error)"));
    }
}
