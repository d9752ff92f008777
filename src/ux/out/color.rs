//! Control over coloured output.

use super::err;

/// When to colour output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// Colour output if the terminal seems to support it.
    Auto,
    /// Always colour output.
    Always,
    /// Never colour output.
    Never,
}

/// Strings used when mapping colour modes to command-line arguments.
pub mod string {
    /// The string representation for automatic colour.
    pub const AUTO: &str = "auto";
    /// The string representation for forced colour.
    pub const ALWAYS: &str = "always";
    /// The string representation for no colour.
    pub const NEVER: &str = "never";

    /// List of all possible string representations of colour modes.
    pub const ALL: &[&str] = &[AUTO, ALWAYS, NEVER];
}

impl Default for Color {
    fn default() -> Self {
        Self::Auto
    }
}

impl Color {
    /// Applies this colour mode to everything subsequently coloured.
    pub fn init(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = err::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            string::AUTO => Ok(Self::Auto),
            string::ALWAYS => Ok(Self::Always),
            string::NEVER => Ok(Self::Never),
            s => Err(Self::Err::BadColor(s.to_owned())),
        }
    }
}
