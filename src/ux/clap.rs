//! `clap` integration for config.

use std::{path, str::FromStr};

use super::{err, out};
use crate::config::{empty, io, Config};

/// Clap names for various arguments.
pub mod arg {
    /// Name of the input file argument.
    pub const INPUT: &str = "INPUT";

    /// Name of the argument saying the input is already a report document.
    pub const REPORT: &str = "report";
    /// Name of the output format argument.
    pub const FORMAT: &str = "format";
    /// Name of the output file argument.
    pub const OUTPUT: &str = "output";
    /// Name of the colour argument.
    pub const COLOR: &str = "color";

    /// Name of the dump-config argument.
    pub const DUMP_CONFIG: &str = "dump-config";
    /// Name of the dump-config-path argument.
    pub const DUMP_CONFIG_PATH: &str = "dump-config-path";
    /// Name of the config argument.
    pub const CONFIG: &str = "config";
    /// Name of the `empty` argument.
    pub const EMPTY: &str = "empty";
}

/// Gets the config file mentioned on the command line, or the default file if
/// no such file was named.
pub fn config_file(matches: &clap::ArgMatches) -> path::PathBuf {
    matches
        .value_of(arg::CONFIG)
        .map_or_else(io::default_file, path::PathBuf::from)
}

/// Trait for things that can be updated from command line arguments taken from
/// `clap`.
pub trait Clappable: Sized {
    /// Merges configuration from a clap match dictionary into this, potentially
    /// replacing it entirely.
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self>;
}

/// We can fill a top-level config using clap.
///
/// Notification settings only come from the config file.
impl Clappable for Config {
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(Self {
            empty: self.empty.parse_clap(matches)?,
            ..self
        })
    }
}

/// We can fill an empty-plan policy using clap.
impl Clappable for empty::Policy {
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(parse_or(matches.value_of(arg::EMPTY), self)?)
    }
}

/// We can fill an output choice using clap.
impl Clappable for out::Choice {
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(parse_or(matches.value_of(arg::FORMAT), self)?)
    }
}

/// We can fill a colour mode using clap.
impl Clappable for out::Color {
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(parse_or(matches.value_of(arg::COLOR), self)?)
    }
}

/// We can fill an output config using clap.
impl Clappable for out::Config {
    fn parse_clap(mut self, matches: &clap::ArgMatches) -> err::Result<Self> {
        self.choice = self.choice.parse_clap(matches)?;
        self.color = self.color.parse_clap(matches)?;
        if let Some(file) = matches.value_of(arg::OUTPUT) {
            self.target = out::Target::File(file.into());
            // Colour codes have no business in a file.
            if matches.value_of(arg::COLOR).is_none() {
                self.color = out::Color::Never;
            }
        }
        Ok(self)
    }
}

/// Parses a `T` from clap matches, or supplies the default.
fn clap_or_default<T: Default + Clappable>(matches: &clap::ArgMatches) -> err::Result<T> {
    T::default().parse_clap(matches)
}

fn parse_or<T: FromStr>(int_str: Option<&str>, default: T) -> std::result::Result<T, T::Err> {
    int_str.map_or(Ok(default), |s| s.parse())
}

/// Actions that can be specified on the command line.
pub enum Action {
    /// Asks to build a report from the test results at the given path.
    Build(path::PathBuf, out::Config),
    /// Asks to read back and show the report document at the given path.
    Show(path::PathBuf, out::Config),
    /// Asks to dump the config.
    DumpConfig,
    /// Asks to dump the path to the config.
    DumpConfigPath,
}

impl Action {
    /// Works out which action the command line asks for.
    pub fn from_clap(matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(if matches.is_present(arg::DUMP_CONFIG) {
            Self::DumpConfig
        } else if matches.is_present(arg::DUMP_CONFIG_PATH) {
            Self::DumpConfigPath
        } else {
            let input = matches.value_of(arg::INPUT).ok_or(err::Error::NoInput)?;
            let input = input.parse()?;
            let out = clap_or_default(matches)?;
            if matches.is_present(arg::REPORT) {
                Self::Show(input, out)
            } else {
                Self::Build(input, out)
            }
        })
    }
}
