//! Loading and validation of rebrand configuration files.

use std::fs;
use std::path::PathBuf;

use crate::defaults::{builtin_config, RebrandConfig};
use crate::error::{Error, Result};

/// Expand `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Load the effective configuration.
///
/// With no path the built-in configuration is returned. With a path the file
/// must exist and parse; sections it omits fall back to built-in values.
pub fn load_config(path: Option<&str>) -> Result<RebrandConfig> {
    let config = match path {
        None => builtin_config(),
        Some(raw) => load_config_from_file(raw)?,
    };

    validate(&config)?;
    Ok(config)
}

fn load_config_from_file(raw: &str) -> Result<RebrandConfig> {
    let path = expand_path(raw);

    if !path.is_file() {
        return Err(Error::validation_invalid_argument(
            "config",
            format!("Config file not found: {}", path.display()),
        ));
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Reject configurations that cannot be applied safely.
pub fn validate(config: &RebrandConfig) -> Result<()> {
    for (index, replacement) in config.replacements.iter().enumerate() {
        if replacement.from.is_empty() {
            return Err(Error::config_invalid_value(
                format!("replacements[{}].from", index),
                None,
                "replacement key must not be empty",
            ));
        }
    }

    if let Some(ext) = config.extensions.iter().find(|e| e.is_empty()) {
        return Err(Error::config_invalid_value(
            "extensions",
            Some(ext.clone()),
            "extension must not be empty",
        ));
    }

    for name in config.exclude_dirs.iter().chain(config.exclude_files.iter()) {
        if name.contains('/') || name.contains('\\') {
            return Err(Error::config_invalid_value(
                "exclude",
                Some(name.clone()),
                "exclusions match bare names, not paths",
            ));
        }
    }

    Ok(())
}
