//! Notification settings carried alongside a report.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings for notifying people about a run, keyed by channel name.
///
/// Nothing in this crate interprets these settings; they are handed on, in
/// the order given, to whatever dispatches notifications.  For example, the
/// `email` channel might map to a list of addresses, and `irc` to a channel
/// name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotifyConfig(IndexMap<String, serde_json::Value>);

impl NotifyConfig {
    /// Constructs an empty set of notification settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the settings for `channel`, replacing any existing ones.
    pub fn insert(&mut self, channel: impl Into<String>, settings: serde_json::Value) -> &mut Self {
        self.0.insert(channel.into(), settings);
        self
    }

    /// Gets the settings for `channel`, if any.
    pub fn get(&self, channel: &str) -> Option<&serde_json::Value> {
        self.0.get(channel)
    }

    /// Iterates over each channel and its settings.
    pub fn channels(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Gets whether there are no channels configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_pass_through_toml() {
        let toml = r##"
            email = ["dev@example.org", "qa@example.org"]
            irc = "#ci"
        "##;
        let cfg: NotifyConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.get("email"),
            Some(&json!(["dev@example.org", "qa@example.org"]))
        );
        assert_eq!(cfg.get("irc"), Some(&json!("#ci")));
        let names: Vec<&str> = cfg.channels().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["email", "irc"]);
    }
}
