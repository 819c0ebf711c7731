//! BioNode edition.
//!
//! Debian-based: packages come from Debian stable, falling back to testing,
//! plus the Bio-Linux repository. The source file is cleared before it is
//! regenerated and apt automation and key management are switched off.

use super::{Edition, EditionIdentity, EditionKind};
use crate::apt::{
    debian_source, preference_lines, AptKeys, PinTier, BIO_LINUX_SOURCE, DEBIAN_REPOSITORY_KEY,
    DEFAULT_DEBIAN_MIRROR,
};
use crate::environment::Environment;
use crate::error::{EditionError, Result};
use crate::executor::{shell_quote, PrivilegedExecutor};

/// Config category that receives the Bio-Linux keyring.
pub const KEYRING_CATEGORY: &str = "minimal";

pub const BIO_LINUX_KEYRING: &str = "bio-linux-keyring";

#[derive(Debug, Clone)]
pub struct BioNode<'env> {
    identity: EditionIdentity,
    env: &'env Environment,
}

impl<'env> BioNode<'env> {
    pub fn new(env: &'env Environment) -> Result<Self> {
        let edition = Self {
            identity: EditionIdentity::for_kind(EditionKind::BioNode, env),
            env,
        };
        edition.check_distribution()?;
        Ok(edition)
    }

    fn debian_mirror(&self) -> &str {
        self.env
            .get(DEBIAN_REPOSITORY_KEY)
            .unwrap_or(DEFAULT_DEBIAN_MIRROR)
    }

    /// Pinning tiers from highest to lowest priority.
    ///
    /// The top tier pins the environment's codename (`n=<dist_name>`), not a
    /// fixed release name, and each stanza carries a single `Package: *` line.
    pub fn pin_tiers(&self) -> Vec<PinTier> {
        vec![
            PinTier::new(format!("n={}", self.env.dist_name), 900),
            PinTier::new("a=stable", 700),
            PinTier::new("a=testing", 650),
            PinTier::new("a=bio-linux", 400),
        ]
    }
}

impl Edition for BioNode<'_> {
    fn identity(&self) -> &EditionIdentity {
        &self.identity
    }

    fn environment(&self) -> &Environment {
        self.env
    }

    /// Pure Debian only, and only when the environment asks for enforcement.
    fn check_distribution(&self) -> Result<()> {
        if self.env.strict_distribution_check && !self.env.is_debian() {
            return Err(EditionError::unsupported_distribution(
                self.identity.name,
                &self.env.distribution,
            ));
        }
        Ok(())
    }

    fn check_packages_source(&self, executor: &dyn PrivilegedExecutor) -> Result<()> {
        let path = self.env.sources_file.display().to_string();
        log::debug!("Clearing {}", path);
        executor.run_privileged(&format!("cat /dev/null > {}", shell_quote(&path)))?;
        Ok(())
    }

    fn rewrite_apt_sources_list(&self, _sources: Vec<String>) -> Vec<String> {
        log::debug!("BioNode: rebuilding apt sources list");
        let mut sources = Vec::with_capacity(4);
        if self.env.is_debian() {
            let mirror = self.debian_mirror();
            let dist = &self.env.dist_name;
            sources.push(debian_source(mirror, dist));
            sources.push(debian_source(mirror, &format!("{dist}-updates")));
            sources.push(debian_source(mirror, "testing"));
        }
        sources.push(BIO_LINUX_SOURCE.to_string());
        sources
    }

    fn rewrite_apt_preferences(&self, _preferences: Vec<String>) -> Vec<String> {
        preference_lines(&self.pin_tiers())
    }

    fn rewrite_apt_automation(&self, _answers: Vec<String>) -> Vec<String> {
        Vec::new()
    }

    fn rewrite_apt_keys(&self, _keys: AptKeys) -> AptKeys {
        AptKeys::default()
    }

    fn rewrite_config_items(&self, category: &str, mut items: Vec<String>) -> Vec<String> {
        if category == KEYRING_CATEGORY {
            items.push(BIO_LINUX_KEYRING.to_string());
        }
        items
    }
}
