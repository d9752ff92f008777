//! Errors that can occur during configuration.
use thiserror::Error;

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// The user supplied the given string, which was a bad empty-plan policy.
    #[error("unsupported empty-plan policy: {0}")]
    BadEmptyPolicy(String),

    /// We couldn't read the config file.
    #[error("couldn't read config file")]
    Io(#[from] std::io::Error),

    /// We couldn't deserialise the config from TOML.
    #[error("couldn't parse config: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// We couldn't serialise the config to TOML.
    #[error("couldn't dump config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
