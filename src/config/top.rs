use super::{empty, err};
use crate::model::NotifyConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// The top-level config structure.
pub struct Config {
    /// What to do with plans that ran no tests.
    pub empty: empty::Policy,
    /// Notification settings to attach to every report.
    #[serde(skip_serializing_if = "NotifyConfig::is_empty")]
    pub notify: NotifyConfig,
}

impl Config {
    /// Gets the notification settings to attach to a report, if any.
    pub fn notify(&self) -> Option<NotifyConfig> {
        if self.notify.is_empty() {
            None
        } else {
            Some(self.notify.clone())
        }
    }

    /// Tries to dump a config to a string.
    ///
    /// The config goes through a TOML value first, so that notification
    /// channels with table settings end up after the scalar ones.
    pub fn to_string(&self) -> err::Result<String> {
        Ok(toml::to_string_pretty(&toml::Value::try_from(self)?)?)
    }

    /// Tries to load a config from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> err::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_round_trip() {
        let cfg = Config::default();
        let s = cfg.to_string().unwrap();
        assert_eq!(Config::from_str(&s).unwrap(), cfg);
    }

    #[test]
    fn test_load_notify() {
        let cfg = Config::from_str(
            r##"
            empty = "omit"

            [notify]
            email = ["dev@example.org"]
            irc = "#ci"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.empty, empty::Policy::Omit);
        let notify = cfg.notify().unwrap();
        assert_eq!(notify.get("email"), Some(&json!(["dev@example.org"])));
        assert_eq!(notify.get("irc"), Some(&json!("#ci")));
    }

    #[test]
    fn test_dump_table_channel_before_scalar() {
        let cfg = Config::from_str(
            r##"
            [notify]
            slack = { channel = "ci" }
            irc = "#ci"
            "##,
        )
        .unwrap();
        let s = cfg.to_string().unwrap();
        assert_eq!(Config::from_str(&s).unwrap(), cfg);
    }

    #[test]
    fn test_empty_notify_is_none() {
        assert!(Config::default().notify().is_none());
    }

    #[test]
    fn test_bad_policy() {
        assert!(Config::from_str(r#"empty = "pass""#).is_err());
    }
}
