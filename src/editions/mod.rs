//! Provisioning editions.
//!
//! An edition is a named customization profile. The orchestrator calls the
//! hooks of [`Edition`] at fixed points of the provisioning pipeline; each
//! variant overrides only the hooks it cares about and inherits the default
//! (identity / no-op) bodies for the rest.
//!
//! # Editions
//!
//! | Edition        | Short name      | Overrides |
//! |----------------|-----------------|-----------|
//! | Base           | `biolinux`      | none |
//! | CloudBioLinux  | `cloudbiolinux` | post-install, config items |
//! | BioNode        | `bionode`       | sources, preferences, automation, keys, config items, |
//! |                |                 | source clearing |
//! | Minimal        | `minimal`       | sources, automation, keys, upgrade |
//!
//! # Lifecycle
//!
//! Editions are built through [`select_edition`] or a variant's `new`, which
//! runs [`Edition::check_distribution`] before returning. A failed check
//! yields no edition. After construction an edition is never mutated.

pub mod base;
pub mod bionode;
pub mod cloudbiolinux;
pub mod minimal;

pub use base::Base;
pub use bionode::BioNode;
pub use cloudbiolinux::CloudBioLinux;
pub use minimal::Minimal;

use crate::apt::{AptKeys, FORCED_UPGRADE_COMMAND};
use crate::environment::Environment;
use crate::error::{EditionError, Result};
use crate::executor::PrivilegedExecutor;
use crate::logic::postinstall::PostInstallActions;

use strum::{EnumIter, EnumString};

/// Identity triple shared by every edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionIdentity {
    /// Display name, e.g. `BioNode Edition`.
    pub name: &'static str,
    /// Lookup key, e.g. `bionode`.
    pub short_name: &'static str,
    /// Version taken from the environment.
    pub version: String,
}

impl EditionIdentity {
    fn for_kind(kind: EditionKind, env: &Environment) -> Self {
        Self {
            name: kind.display_name(),
            short_name: kind.short_name(),
            version: env.version.clone(),
        }
    }
}

/// Hook set called by the provisioning orchestrator.
///
/// Rewrite hooks take ownership of their input and return a value of the
/// same shape; the defaults hand the input back untouched. Side-effecting
/// hooks receive their collaborators explicitly and propagate collaborator
/// errors as-is.
pub trait Edition {
    fn identity(&self) -> &EditionIdentity;

    fn environment(&self) -> &Environment;

    fn name(&self) -> &str {
        self.identity().name
    }

    fn short_name(&self) -> &str {
        self.identity().short_name
    }

    fn version(&self) -> &str {
        &self.identity().version
    }

    /// Ensure the environment's distribution suits this edition.
    fn check_distribution(&self) -> Result<()> {
        Ok(())
    }

    /// Inspect or reset the package source file before it is regenerated.
    fn check_packages_source(&self, _executor: &dyn PrivilegedExecutor) -> Result<()> {
        Ok(())
    }

    fn rewrite_apt_sources_list(&self, sources: Vec<String>) -> Vec<String> {
        sources
    }

    fn rewrite_apt_preferences(&self, preferences: Vec<String>) -> Vec<String> {
        preferences
    }

    fn rewrite_apt_automation(&self, answers: Vec<String>) -> Vec<String> {
        answers
    }

    fn rewrite_apt_keys(&self, keys: AptKeys) -> AptKeys {
        keys
    }

    /// Upgrade every installed package.
    fn apt_upgrade_system(&self, executor: &dyn PrivilegedExecutor) -> Result<()> {
        log::debug!("{}: forcing system upgrade", self.short_name());
        executor.run_privileged(FORCED_UPGRADE_COMMAND)?;
        Ok(())
    }

    /// Finishing steps after core package installation.
    fn post_install(
        &self,
        _actions: &dyn PostInstallActions,
        _pkg_install: Option<&[String]>,
    ) -> Result<()> {
        Ok(())
    }

    /// Rewrite the configured items of a category (`packages`, `minimal`,
    /// `python`, ...).
    fn rewrite_config_items(&self, _category: &str, items: Vec<String>) -> Vec<String> {
        items
    }
}

/// Closed set of known editions, keyed by short name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EditionKind {
    /// Shared defaults; also accepted as `base`.
    #[default]
    #[strum(to_string = "biolinux", serialize = "base")]
    Base,
    CloudBioLinux,
    BioNode,
    Minimal,
}

impl EditionKind {
    pub fn short_name(&self) -> &'static str {
        match self {
            EditionKind::Base => "biolinux",
            EditionKind::CloudBioLinux => "cloudbiolinux",
            EditionKind::BioNode => "bionode",
            EditionKind::Minimal => "minimal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EditionKind::Base => "BioLinux base Edition",
            EditionKind::CloudBioLinux => "CloudBioLinux Edition",
            EditionKind::BioNode => "BioNode Edition",
            EditionKind::Minimal => "Minimal Edition",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditionKind::Base => "Shared provisioning defaults",
            EditionKind::CloudBioLinux => "Galaxy, CloudMan and FreeNX on top of the base edition",
            EditionKind::BioNode => "Debian stable/testing with the Bio-Linux repository",
            EditionKind::Minimal => "Bio-Linux repository only, no forced upgrade",
        }
    }

    /// Construct the edition, validating it against `env`.
    pub fn build<'env>(self, env: &'env Environment) -> Result<Box<dyn Edition + 'env>> {
        let edition: Box<dyn Edition + 'env> = match self {
            EditionKind::Base => Box::new(Base::new(env)?),
            EditionKind::CloudBioLinux => Box::new(CloudBioLinux::new(env)?),
            EditionKind::BioNode => Box::new(BioNode::new(env)?),
            EditionKind::Minimal => Box::new(Minimal::new(env)?),
        };
        log::debug!(
            "Selected {} ({}) version {}",
            edition.name(),
            edition.short_name(),
            edition.version()
        );
        Ok(edition)
    }
}

/// Look up an edition by short name and construct it.
pub fn select_edition<'env>(name: &str, env: &'env Environment) -> Result<Box<dyn Edition + 'env>> {
    let kind: EditionKind = name
        .trim()
        .parse()
        .map_err(|_| EditionError::unknown_edition(name))?;
    kind.build(env)
}
