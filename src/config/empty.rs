//! Support for configuring what happens to plans that ran no tests.

use super::err;
use crate::report::input::PlanInput;
use serde::{de::Visitor, Deserialize, Serialize};

/// String representations of empty-plan policies.
pub mod string {
    /// String representation of the reject policy.
    pub const REJECT: &str = "reject";
    /// String representation of the omit policy.
    pub const OMIT: &str = "omit";
    /// String representations of all policies.
    pub const ALL: &[&str] = &[REJECT, OMIT];
}

/// Enumeration of policies for plans with no tests.
///
/// There is no policy that invents an outcome for an empty plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Policy {
    /// Empty plans make building the report fail.
    Reject,
    /// Empty plans are left out of the report.
    Omit,
}

/// The default policy is rejection.
impl Default for Policy {
    fn default() -> Self {
        Self::Reject
    }
}

/// Tries to parse a [Policy] from a string.
///
/// # Examples
///
/// ```
/// use runreport::config::empty::Policy;
/// assert_eq!(str::parse::<Policy>("reject").unwrap(), Policy::Reject);
/// assert_eq!(str::parse::<Policy>("Omit").unwrap(), Policy::Omit);
/// assert!(str::parse::<Policy>("default-to-pass").is_err());
/// ```
impl std::str::FromStr for Policy {
    type Err = err::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match &*s {
            string::REJECT => Ok(Self::Reject),
            string::OMIT => Ok(Self::Omit),
            _ => Err(Self::Err::BadEmptyPolicy(s)),
        }
    }
}

/// Formats a [Policy] by applying the inverse of [FromStr].
impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "{}", string::REJECT),
            Self::Omit => write!(f, "{}", string::OMIT),
        }
    }
}

/// Serialize by stringification.
impl Serialize for Policy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize by parsing.
impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PolicyVisitor)
    }
}

struct PolicyVisitor;

impl<'de> Visitor<'de> for PolicyVisitor {
    type Value = Policy;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "one of: {}", string::ALL.join(", "))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl Policy {
    /// Gets an iterator of all available policies.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Reject, Self::Omit].into_iter()
    }

    /// Decides whether `plan` should go on to the report builders.
    ///
    /// Non-empty plans always go through.  Empty plans go through under
    /// [Policy::Reject], so that the builders can reject them.
    pub fn keep(&self, plan: &PlanInput) -> bool {
        if !plan.tests.is_empty() {
            return true;
        }
        match self {
            Self::Reject => true,
            Self::Omit => {
                log::warn!("omitting plan '{}', which ran zero tests", plan.name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the ALL constant reflects the result of getting strings for
    /// each policy in turn.
    #[test]
    fn test_all_strings_in_sync() {
        let got_set: std::collections::HashSet<String> =
            string::ALL.iter().map(|x| x.to_string()).collect();
        let want_set: std::collections::HashSet<String> =
            Policy::all().map(|x| x.to_string()).collect();
        assert_eq!(got_set, want_set)
    }

    #[test]
    fn test_parse() {
        assert_eq!("reject".parse::<Policy>().unwrap(), Policy::Reject);
        assert_eq!("OMIT".parse::<Policy>().unwrap(), Policy::Omit);
        assert!(matches!(
            "pass".parse::<Policy>(),
            Err(err::Error::BadEmptyPolicy(s)) if s == "pass"
        ));
    }

    #[test]
    fn test_keep() {
        let empty = PlanInput {
            name: "/plan/empty".to_owned(),
            tests: vec![],
        };
        assert!(Policy::Reject.keep(&empty));
        assert!(!Policy::Omit.keep(&empty));
    }
}
