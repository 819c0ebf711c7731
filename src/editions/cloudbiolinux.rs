//! CloudBioLinux edition.
//!
//! Keeps the base apt hooks, always pulls in the Galaxy/CloudMan stack and
//! runs the cloud finishing steps after installation.

use super::{Edition, EditionIdentity, EditionKind};
use crate::environment::Environment;
use crate::error::Result;
use crate::logic::postinstall::PostInstallActions;

/// Items every CloudBioLinux configuration must contain, in this order.
pub const REQUIRED_ITEMS: &[&str] = &["galaxy", "galaxy_tools", "cloudman"];

/// Install-list entry that triggers CloudMan configuration.
pub const CLOUDMAN_PACKAGE: &str = "cloudman";

#[derive(Debug, Clone)]
pub struct CloudBioLinux<'env> {
    identity: EditionIdentity,
    env: &'env Environment,
}

impl<'env> CloudBioLinux<'env> {
    pub fn new(env: &'env Environment) -> Result<Self> {
        let edition = Self {
            identity: EditionIdentity::for_kind(EditionKind::CloudBioLinux, env),
            env,
        };
        edition.check_distribution()?;
        Ok(edition)
    }
}

impl Edition for CloudBioLinux<'_> {
    fn identity(&self) -> &EditionIdentity {
        &self.identity
    }

    fn environment(&self) -> &Environment {
        self.env
    }

    /// FreeNX scripts always; CloudMan only when it is being installed.
    fn post_install(
        &self,
        actions: &dyn PostInstallActions,
        pkg_install: Option<&[String]>,
    ) -> Result<()> {
        actions.install_remote_desktop_scripts(self.env)?;
        let wants_cloudman = pkg_install
            .is_some_and(|pkgs| pkgs.iter().any(|p| p == CLOUDMAN_PACKAGE));
        if wants_cloudman {
            actions.configure_cloudman(self.env)?;
        } else {
            log::debug!("cloudman not in install list, skipping CloudMan configuration");
        }
        Ok(())
    }

    fn rewrite_config_items(&self, category: &str, mut items: Vec<String>) -> Vec<String> {
        for required in REQUIRED_ITEMS {
            if !items.iter().any(|i| i == required) {
                log::debug!("Adding {} to {}", required, category);
                items.push((*required).to_string());
            }
        }
        items
    }
}
