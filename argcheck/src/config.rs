//! `argcheck.toml`: log filter and per-check message overrides.
//!
//! ```toml
//! log_filter = "argcheck=debug"
//!
//! [messages]
//! not-empty = "DATABASE_URL must be set"
//! contains = "unknown deployment environment"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::check::not_empty_with;
use crate::error::CheckKind;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "argcheck.toml";

/// Tool configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArgcheckConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Defaults to
    /// `error`, which hides the per-rejection `warn` events.
    pub log_filter: String,

    /// Custom failure messages keyed by check name.
    pub messages: BTreeMap<CheckKind, String>,
}

impl Default for ArgcheckConfig {
    fn default() -> Self {
        Self {
            log_filter: "error".to_string(),
            messages: BTreeMap::new(),
        }
    }
}

impl ArgcheckConfig {
    pub fn validate(&self) -> Result<()> {
        not_empty_with("log_filter must be non-empty", self.log_filter.as_str())?;
        for (check, message) in &self.messages {
            not_empty_with(
                &format!("messages.{check} must be non-empty"),
                message.as_str(),
            )?;
        }
        Ok(())
    }

    /// Configured override for `check`, if any.
    pub fn message_for(&self, check: CheckKind) -> Option<&str> {
        self.messages.get(&check).map(String::as_str)
    }
}

/// A loaded config and where it came from.
///
/// Loading happens before the subscriber exists, so the load is reported
/// afterwards through [`LoadedConfig::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: ArgcheckConfig,
    /// `false` when the file was missing and defaults apply.
    pub from_file: bool,
}

impl LoadedConfig {
    pub fn log(&self, path: &Path) {
        if self.from_file {
            tracing::debug!(
                path = %path.display(),
                overrides = self.config.messages.len(),
                log_filter = %self.config.log_filter,
                "loaded config"
            );
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
    }
}

/// Read and validate `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: ArgcheckConfig::default(),
            from_file: false,
        });
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: ArgcheckConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(LoadedConfig {
        config,
        from_file: true,
    })
}

/// Validate, then replace `path` through a sibling temp file so a reader
/// never sees a half-written override table.
pub fn write_config(path: &Path, cfg: &ArgcheckConfig) -> Result<()> {
    cfg.validate()?;
    let body = toml::to_string_pretty(cfg).context("serialize config toml")?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, format!("{body}\n"))
        .with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let loaded = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(loaded.config, ArgcheckConfig::default());
        assert!(!loaded.from_file);
    }

    #[test]
    fn default_log_filter_hides_rejection_events() {
        assert_eq!(ArgcheckConfig::default().log_filter, "error");
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("argcheck.toml");
        let mut cfg = ArgcheckConfig::default();
        cfg.messages
            .insert(CheckKind::NotEmpty, "DATABASE_URL must be set".to_string());
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.config, cfg);
        assert!(loaded.from_file);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn parses_kebab_case_message_keys() {
        let cfg: ArgcheckConfig = toml::from_str(
            r#"
[messages]
not-contains-key = "tenant already registered"
is-true = "feature flag must be on"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.log_filter, "error");
        assert_eq!(
            cfg.message_for(CheckKind::NotContainsKey),
            Some("tenant already registered")
        );
        assert_eq!(cfg.message_for(CheckKind::IsTrue), Some("feature flag must be on"));
        assert_eq!(cfg.message_for(CheckKind::Equals), None);
    }

    #[test]
    fn blank_message_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("argcheck.toml");
        fs::write(&path, "[messages]\nequals = \"   \"\n").expect("write");
        let err = load_config(&path).unwrap_err();
        let failure = err
            .downcast_ref::<ValidationFailure>()
            .expect("validation failure");
        assert_eq!(failure.message(), "messages.equals must be non-empty");
    }

    #[test]
    fn unknown_check_name_fails_to_parse() {
        let err = toml::from_str::<ArgcheckConfig>("[messages]\nequal = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("equal"));
    }
}
