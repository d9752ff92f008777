//! Log references attached to test results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The log file(s) produced by a test.
///
/// A test may produce one log or several; the two shapes are kept apart so
/// that a report document reads back exactly as it was written.  A test
/// with no logs at all is `Many` with no paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Log {
    /// A single log path, serialised as a bare string.
    One(PathBuf),
    /// A sequence of log paths, in the order the test produced them.
    Many(Vec<PathBuf>),
}

/// The default log is no logs at all.
impl Default for Log {
    fn default() -> Self {
        Self::Many(vec![])
    }
}

impl Log {
    /// Constructs a [Log] from a sequence of paths, preserving their order.
    ///
    /// A single path becomes [Log::One]; anything else becomes [Log::Many].
    ///
    /// # Examples
    ///
    /// ```
    /// use runreport::model::Log;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Log::from_paths(vec!["a.log"]), Log::One(PathBuf::from("a.log")));
    /// assert_eq!(
    ///     Log::from_paths(vec!["b.log", "a.log"]),
    ///     Log::Many(vec![PathBuf::from("b.log"), PathBuf::from("a.log")])
    /// );
    /// ```
    pub fn from_paths<P: Into<PathBuf>>(paths: impl IntoIterator<Item = P>) -> Self {
        let mut paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.len() == 1 {
            Self::One(paths.remove(0))
        } else {
            Self::Many(paths)
        }
    }

    /// Iterates over the paths in this log, in stored order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        let slice: &[PathBuf] = match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths.as_slice(),
        };
        slice.iter().map(PathBuf::as_path)
    }

    /// Gets the number of paths in this log.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(paths) => paths.len(),
        }
    }

    /// Gets whether this log has no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<PathBuf> for Log {
    fn from(path: PathBuf) -> Self {
        Self::One(path)
    }
}

impl From<&str> for Log {
    fn from(path: &str) -> Self {
        Self::One(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_path_serialises_as_scalar() {
        let log = Log::from_paths(vec!["out/one.log"]);
        assert_eq!(serde_json::to_value(&log).unwrap(), serde_json::json!("out/one.log"));
    }

    #[test]
    fn test_many_paths_keep_order() {
        let log = Log::from_paths(vec!["c.log", "a.log", "b.log"]);
        assert_eq!(log.len(), 3);
        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            serde_json::json!(["c.log", "a.log", "b.log"])
        );
        let paths: Vec<&Path> = log.paths().collect();
        assert_eq!(paths, vec![Path::new("c.log"), Path::new("a.log"), Path::new("b.log")]);
    }

    #[test]
    fn test_one_element_sequence_stays_a_sequence() {
        let log: Log = serde_json::from_str(r#"["only.log"]"#).unwrap();
        assert_eq!(log, Log::Many(vec![PathBuf::from("only.log")]));
    }

    #[test]
    fn test_bad_shapes_rejected() {
        assert!(serde_json::from_str::<Log>("42").is_err());
        assert!(serde_json::from_str::<Log>(r#"["a.log", 1]"#).is_err());
        assert!(serde_json::from_str::<Log>(r#"{"path": "a.log"}"#).is_err());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Log::default().is_empty());
        assert_eq!(Log::from_paths(Vec::<PathBuf>::new()), Log::default());
    }
}
