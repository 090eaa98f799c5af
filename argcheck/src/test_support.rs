//! Test-only fixtures: a custom subject type and temporary config files.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::config::{ArgcheckConfig, DEFAULT_CONFIG_FILE, write_config};

/// A TCP port rendered as `:<n>` in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port(pub u16);

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

crate::display_subject!(Port);

/// Service name to port, for mapping checks.
pub fn service_ports() -> HashMap<&'static str, Port> {
    HashMap::from([("db", Port(5432)), ("cache", Port(6379)), ("web", Port(8080))])
}

/// Temporary working directory for running the binary against a config.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(DEFAULT_CONFIG_FILE)
    }

    /// Write raw TOML, bypassing validation.
    pub fn write_raw(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn write(&self, cfg: &ArgcheckConfig) -> Result<PathBuf> {
        let path = self.config_path();
        write_config(&path, cfg)?;
        Ok(path)
    }
}
