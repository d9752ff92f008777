//! Outcomes of individual tests, and of the plans and runs containing them.

use serde::{de::Visitor, Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display, str::FromStr};

/// The categorical result of a test, plan, or run.
///
/// Outcomes are totally ordered by severity (`info < passed < failed <
/// error`), such that `max` on an iterator of outcomes gives the outcome of
/// whatever contains them.  The order comes from [Outcome::rank], not from
/// the order in which the variants are declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The test passed.
    Passed,
    /// The test ran, but failed.
    Failed,
    /// The test could not be run to completion.
    Error,
    /// The test produced information only, and has no verdict.
    Info,
}

/// String representations for outcomes.
///
/// These are the only accepted spellings; parsing is case-sensitive.
pub mod string {
    /// String representation for info outcomes.
    pub const INFO: &str = "info";
    /// String representation for passed outcomes.
    pub const PASSED: &str = "passed";
    /// String representation for failed outcomes.
    pub const FAILED: &str = "failed";
    /// String representation for error outcomes.
    pub const ERROR: &str = "error";

    /// String representations of all outcomes, in ascending rank order.
    pub const ALL: &[&str] = &[INFO, PASSED, FAILED, ERROR];
}

impl Outcome {
    /// Gets the severity rank of this outcome.
    ///
    /// Ranks exist only for comparison; outcomes are always stored and
    /// serialised by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::model::Outcome;
    /// assert_eq!(Outcome::Info.rank(), 0);
    /// assert_eq!(Outcome::Passed.rank(), 1);
    /// assert_eq!(Outcome::Failed.rank(), 2);
    /// assert_eq!(Outcome::Error.rank(), 3);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Info => 0,
            Self::Passed => 1,
            Self::Failed => 2,
            Self::Error => 3,
        }
    }

    /// Gets an iterator of each [Outcome], in ascending rank order.
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::model::Outcome;
    /// let all: Vec<Outcome> = Outcome::all().collect();
    /// assert_eq!(all, vec![Outcome::Info, Outcome::Passed, Outcome::Failed, Outcome::Error]);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Info, Self::Passed, Self::Failed, Self::Error].into_iter()
    }

    /// Gets whether this outcome counts as a success for the purposes of
    /// reporting to the outside world.
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::model::Outcome;
    /// assert!(Outcome::Info.is_success());
    /// assert!(Outcome::Passed.is_success());
    /// assert!(!Outcome::Failed.is_success());
    /// assert!(!Outcome::Error.is_success());
    /// ```
    #[must_use]
    pub fn is_success(self) -> bool {
        self <= Self::Passed
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Info => string::INFO,
            Self::Passed => string::PASSED,
            Self::Failed => string::FAILED,
            Self::Error => string::ERROR,
        }
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// We can produce a string representation of the outcome.
///
/// # Examples
///
/// ```
/// use runreport::model::Outcome;
/// assert_eq!(Outcome::Info.to_string(), "info");
/// assert_eq!(Outcome::Passed.to_string(), "passed");
/// assert_eq!(Outcome::Failed.to_string(), "failed");
/// assert_eq!(Outcome::Error.to_string(), "error");
/// ```
impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// We can parse a string representation of an outcome.
///
/// # Examples
///
/// ```
/// use runreport::model::Outcome;
/// assert_eq!(str::parse::<Outcome>("passed"), Ok(Outcome::Passed));
/// assert_eq!(str::parse::<Outcome>("error"), Ok(Outcome::Error));
/// assert!(str::parse::<Outcome>("Passed").is_err());
/// assert!(str::parse::<Outcome>("unknown").is_err());
/// ```
impl FromStr for Outcome {
    /// Errors just take ownership of the invalid string.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            string::INFO => Ok(Self::Info),
            string::PASSED => Ok(Self::Passed),
            string::FAILED => Ok(Self::Failed),
            string::ERROR => Ok(Self::Error),
            _ => Err(s.to_owned()),
        }
    }
}

/// Serialize by name.
impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserialize by parsing.
impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(OutcomeVisitor)
    }
}

struct OutcomeVisitor;

impl<'de> Visitor<'de> for OutcomeVisitor {
    type Value = Outcome;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "one of: {}", string::ALL.join(", "))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|bad: String| E::custom(format!("unknown outcome '{}'", bad)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// `max` of an iterator should follow rank, not declaration order.
    fn test_max_follows_rank() {
        let v = vec![Outcome::Error, Outcome::Info];
        assert_eq!(v.into_iter().max(), Some(Outcome::Error));

        let v = vec![Outcome::Passed, Outcome::Info];
        assert_eq!(v.into_iter().max(), Some(Outcome::Passed));
    }

    #[test]
    /// Comparison agrees with rank for every pair of outcomes.
    fn test_cmp_agrees_with_rank() {
        for x in Outcome::all() {
            for y in Outcome::all() {
                assert_eq!(x.cmp(&y), x.rank().cmp(&y.rank()), "{} vs {}", x, y);
            }
        }
    }

    /// Tests that the ALL constant reflects the string of each outcome in turn.
    #[test]
    fn test_all_strings_in_sync() {
        let got: Vec<String> = string::ALL.iter().map(|x| x.to_string()).collect();
        let want: Vec<String> = Outcome::all().map(|x| x.to_string()).collect();
        assert_eq!(got, want)
    }

    #[test]
    fn test_parse_display_inverse() {
        for x in Outcome::all() {
            assert_eq!(x.to_string().parse::<Outcome>(), Ok(x))
        }
    }

    #[test]
    fn test_serde_uses_names() {
        assert_eq!(serde_json::to_string(&Outcome::Failed).unwrap(), "\"failed\"");
        assert_eq!(
            serde_json::from_str::<Outcome>("\"info\"").unwrap(),
            Outcome::Info
        );
        assert!(serde_json::from_str::<Outcome>("\"unknown\"").is_err());
        assert!(serde_json::from_str::<Outcome>("2").is_err());
    }
}
