//! Post-install actions reached from edition hooks.
//!
//! Editions decide *whether* an action runs; `PostInstallActions` decides
//! *how*. `ScriptPostInstall` runs the typed helper scripts from
//! [`crate::scripts::post_install`] through a privileged executor.
//!
//! # Failure Policy
//!
//! Failures are returned unchanged to the hook caller. Nothing here retries.

use crate::environment::Environment;
use crate::error::Result;
use crate::executor::{run_script, PrivilegedExecutor};
use crate::scripts::post_install::{CloudmanConfigArgs, FreenxScriptsArgs};

use std::path::PathBuf;

/// Env var overriding the default helper scripts directory.
pub const SCRIPTS_DIR_ENV: &str = "CLOUDBIO_SCRIPTS_DIR";

/// Helper scripts directory used when `CLOUDBIO_SCRIPTS_DIR` is unset.
pub const DEFAULT_SCRIPTS_DIR: &str = "./scripts";

/// Resolve the helper scripts directory from the process environment.
pub fn default_scripts_dir() -> PathBuf {
    std::env::var(SCRIPTS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCRIPTS_DIR))
}

/// Finishing steps an edition may trigger after core package installation.
pub trait PostInstallActions {
    /// Install the remote desktop (FreeNX) helper scripts on the target.
    fn install_remote_desktop_scripts(&self, env: &Environment) -> Result<()>;

    /// Write the CloudMan cloud-orchestration configuration.
    fn configure_cloudman(&self, env: &Environment) -> Result<()>;
}

/// Runs post-install helper scripts with root privileges.
pub struct ScriptPostInstall<'a> {
    executor: &'a dyn PrivilegedExecutor,
    scripts_dir: PathBuf,
}

impl<'a> ScriptPostInstall<'a> {
    pub fn new(executor: &'a dyn PrivilegedExecutor, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            scripts_dir: scripts_dir.into(),
        }
    }
}

impl PostInstallActions for ScriptPostInstall<'_> {
    fn install_remote_desktop_scripts(&self, env: &Environment) -> Result<()> {
        log::info!("Installing FreeNX helper scripts for {}", env.dist_name);
        let args = FreenxScriptsArgs::from_environment(env);
        run_script(self.executor, &self.scripts_dir, &args)?;
        Ok(())
    }

    fn configure_cloudman(&self, env: &Environment) -> Result<()> {
        log::info!("Configuring CloudMan {}", env.version);
        let args = CloudmanConfigArgs::from_environment(env);
        run_script(self.executor, &self.scripts_dir, &args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::DryRunExecutor;

    #[test]
    fn test_script_post_install_commands() {
        let exec = DryRunExecutor::new();
        let env = Environment::new("ubuntu", "jammy", "2.0");
        let actions = ScriptPostInstall::new(&exec, "/srv/scripts");

        actions.install_remote_desktop_scripts(&env).unwrap();
        actions.configure_cloudman(&env).unwrap();

        assert_eq!(
            exec.commands(),
            vec![
                concat!(
                    "bash /srv/scripts/install_freenx_scripts.sh",
                    " --distribution ubuntu --codename jammy"
                ),
                "bash /srv/scripts/configure_cloudman.sh --version 2.0",
            ]
        );
    }
}
