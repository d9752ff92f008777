//! Functions for loading config from a file.

use super::{err, top::Config};
use std::path;

/// Gets a path to the default config file.
pub fn default_file() -> path::PathBuf {
    let mut path = default_dir();
    path.push("config.toml");
    path
}

/// Gets a path to the default config directory.
pub fn default_dir() -> path::PathBuf {
    if let Some(mut ucd) = dirs::config_dir() {
        ucd.push("runreport");
        ucd
    } else {
        path::PathBuf::new()
    }
}

/// Loads the config at `path`, or the default config if there is no file
/// there.
pub fn load(path: &path::Path) -> err::Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}; using defaults", path.display());
        return Ok(Config::default());
    }
    log::debug!("loading config from {}", path.display());
    Config::from_str(&std::fs::read_to_string(path)?)
}
