//! Enumerated selection of outputs, for use in command-line selection.

use super::{abs, color, err, json, summary};
use crate::model::RunReport;
use std::{io::Write, path::PathBuf, str::FromStr};

/// Enumeration of outputter choices.
///
/// This is not serialisable or deserialisable as it is not stored in config.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Choice {
    /// Selects the summary outputter.
    Summary,
    /// Selects the JSON outputter.
    Json,
}

impl Choice {
    /// Constructs the appropriate outputter for the choice, using the given
    /// writer.
    pub fn into_outputter<'a, W: Write + 'a>(self, writer: W) -> Box<dyn abs::Outputter + 'a> {
        match self {
            Self::Summary => Box::new(summary::Summary::new(writer)),
            Self::Json => Box::new(json::Json::new(writer)),
        }
    }

    /// Gets an iterator of all outputter choices.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Summary, Self::Json].into_iter()
    }
}

/// Strings used when mapping outputter choices to command-line arguments.
pub mod string {
    /// The string representation for the summary outputter.
    pub const SUMMARY: &str = "summary";
    /// The string representation for the JSON outputter.
    pub const JSON: &str = "json";

    /// List of all possible string representations of outputter choices.
    pub const ALL: &[&str] = &[SUMMARY, JSON];
}

/// The default outputter is the summary.
impl Default for Choice {
    fn default() -> Self {
        Self::Summary
    }
}

impl FromStr for Choice {
    type Err = err::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let su = s.to_lowercase();
        match &*su {
            string::SUMMARY => Ok(Self::Summary),
            string::JSON => Ok(Self::Json),
            _ => Err(Self::Err::BadOutputter(su)),
        }
    }
}

/// Where output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Standard output.
    Stdout,
    /// A file, created (or truncated) only once there is something to write.
    File(PathBuf),
}

impl Target {
    /// Opens this target for writing.
    fn open(&self) -> err::Result<Box<dyn Write>> {
        Ok(match self {
            Self::Stdout => Box::new(std::io::stdout()),
            Self::File(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        })
    }
}

/// A complete definition of how to select an output.
#[derive(Clone, Debug)]
pub struct Config {
    /// The choice of outputter.
    pub choice: Choice,
    /// The colour mode.
    pub color: color::Color,
    /// Where the output goes.
    pub target: Target,
}

impl Config {
    /// Opens the target and constructs the outputter this config describes.
    ///
    /// # Errors
    ///
    /// Fails if the target can't be opened.
    pub fn into_outputter(self) -> err::Result<Box<dyn abs::Outputter>> {
        self.color.init();
        Ok(self.choice.into_outputter(self.target.open()?))
    }
}

/// The default config uses the default outputter choice, and stdout.
impl Default for Config {
    fn default() -> Self {
        Config {
            choice: Choice::default(),
            color: color::Color::default(),
            target: Target::Stdout,
        }
    }
}

/// Trait used to add inline outputter methods to reports.
pub trait Outputtable {
    /// Outputs this item onto the outputter chosen by `on`.
    ///
    /// # Errors
    ///
    /// Generally carries any errors caused by trying to `output` to the
    /// outputter given by `on`.
    fn output(&self, on: Config) -> err::Result<()>;
}

impl Outputtable for RunReport {
    fn output(&self, on: Config) -> err::Result<()> {
        on.into_outputter()?.output(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Outcome, TestResult},
        report::build,
    };

    /// Tests that the ALL constant lines up with parsing.
    #[test]
    fn test_all_strings_parse() {
        let got: Vec<Choice> = string::ALL.iter().map(|s| s.parse().unwrap()).collect();
        let want: Vec<Choice> = Choice::all().collect();
        assert_eq!(got, want)
    }

    #[test]
    fn test_file_target_opened_on_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = Config {
            choice: Choice::Json,
            color: color::Color::Never,
            target: Target::File(path.clone()),
        };
        assert!(!path.exists());

        let plan = build::plan(
            "/plan/one",
            vec![TestResult::new("/test/one", Outcome::Passed, "one.log")],
        )
        .unwrap();
        build::run(vec![plan], None).unwrap().output(config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("/plan/one"));
    }
}
