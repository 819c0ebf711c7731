//! Provisioning environment handed to every edition.
//!
//! The environment is owned by the caller and read-only from an edition's
//! point of view. It can be saved to and loaded from JSON so a provisioning
//! run can be described in a single file.

use crate::error::{EditionError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the apt source list on the target host.
pub const DEFAULT_SOURCES_FILE: &str = "/etc/apt/sources.list";

fn default_sources_file() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCES_FILE)
}

/// Target host description shared by all hooks of a provisioning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Distribution family, e.g. `debian` or `ubuntu`.
    pub distribution: String,
    /// Release codename, e.g. `bookworm`.
    pub dist_name: String,
    /// Version stamped onto every edition.
    pub version: String,
    /// Apt source list path on the target.
    #[serde(default = "default_sources_file")]
    pub sources_file: PathBuf,
    /// Enforce per-edition distribution checks at construction.
    #[serde(default)]
    pub strict_distribution_check: bool,
    /// Free-form overrides such as `debian_repository`.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl Environment {
    /// Create an environment with default sources file and no overrides
    pub fn new(
        distribution: impl Into<String>,
        dist_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            distribution: distribution.into(),
            dist_name: dist_name.into(),
            version: version.into(),
            sources_file: default_sources_file(),
            strict_distribution_check: false,
            overrides: BTreeMap::new(),
        }
    }

    /// Set an override value.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Set the apt source list path.
    pub fn with_sources_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources_file = path.into();
        self
    }

    /// Turn distribution enforcement on or off.
    pub fn with_strict_distribution_check(mut self, strict: bool) -> Self {
        self.strict_distribution_check = strict;
        self
    }

    /// Look up an override. Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Whether the target runs plain Debian. The match is exact: `Debian` is not `debian`.
    pub fn is_debian(&self) -> bool {
        self.distribution == "debian"
    }

    /// Save the environment to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        debug!("Environment saved to {:?}", path.as_ref());
        Ok(())
    }

    /// Load the environment from a JSON file.
    ///
    /// A missing or unreadable file gives [`EditionError::Io`]; malformed
    /// content gives [`EditionError::Json`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let env: Self = serde_json::from_str(&content)?;
        debug!("Environment loaded from {:?}", path.as_ref());
        Ok(env)
    }

    /// Validate the environment. Failures are [`EditionError::Config`].
    pub fn validate(&self) -> Result<()> {
        if self.distribution.trim().is_empty() {
            return Err(EditionError::config("Distribution must be specified"));
        }
        if !self
            .distribution
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(EditionError::config(
                "Distribution can only contain letters, numbers, '-' and '_'",
            ));
        }

        if self.dist_name.trim().is_empty() {
            return Err(EditionError::config("Distribution codename must be specified"));
        }
        if self.dist_name.chars().any(char::is_whitespace) {
            return Err(EditionError::config(
                "Distribution codename must not contain whitespace",
            ));
        }

        if self.version.trim().is_empty() {
            return Err(EditionError::config("Version must be specified"));
        }

        if !self.sources_file.is_absolute() {
            return Err(EditionError::config(format!(
                "Sources file must be an absolute path: {}",
                self.sources_file.display()
            )));
        }

        if self.overrides.keys().any(|key| key.trim().is_empty()) {
            return Err(EditionError::config("Override keys must not be empty"));
        }

        Ok(())
    }
}
