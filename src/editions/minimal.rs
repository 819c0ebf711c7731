//! Minimal edition.
//!
//! Assumes the target already has stable packages configured: only the
//! Bio-Linux repository is added, no automation answers or keys are managed
//! and the forced system upgrade is skipped.

use super::{Edition, EditionIdentity, EditionKind};
use crate::apt::{AptKeys, BIO_LINUX_SOURCE};
use crate::environment::Environment;
use crate::error::Result;
use crate::executor::PrivilegedExecutor;

#[derive(Debug, Clone)]
pub struct Minimal<'env> {
    identity: EditionIdentity,
    env: &'env Environment,
}

impl<'env> Minimal<'env> {
    pub fn new(env: &'env Environment) -> Result<Self> {
        let edition = Self {
            identity: EditionIdentity::for_kind(EditionKind::Minimal, env),
            env,
        };
        edition.check_distribution()?;
        Ok(edition)
    }
}

impl Edition for Minimal<'_> {
    fn identity(&self) -> &EditionIdentity {
        &self.identity
    }

    fn environment(&self) -> &Environment {
        self.env
    }

    fn rewrite_apt_sources_list(&self, _sources: Vec<String>) -> Vec<String> {
        vec![BIO_LINUX_SOURCE.to_string()]
    }

    fn rewrite_apt_automation(&self, _answers: Vec<String>) -> Vec<String> {
        Vec::new()
    }

    fn rewrite_apt_keys(&self, _keys: AptKeys) -> AptKeys {
        AptKeys::default()
    }

    fn apt_upgrade_system(&self, _executor: &dyn PrivilegedExecutor) -> Result<()> {
        log::debug!("Skipping forced system upgrade");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::DryRunExecutor;

    fn env() -> Environment {
        Environment::new("ubuntu", "focal", "0.5")
    }

    #[test]
    fn test_identity() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        assert_eq!(edition.name(), "Minimal Edition");
        assert_eq!(edition.short_name(), "minimal");
        assert_eq!(edition.version(), "0.5");
    }

    #[test]
    fn test_sources_fixed() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        let expected = vec!["deb http://nebc.nerc.ac.uk/bio-linux/ unstable bio-linux".to_string()];
        assert_eq!(edition.rewrite_apt_sources_list(vec![]), expected);
        assert_eq!(
            edition.rewrite_apt_sources_list(vec!["deb http://a b c".to_string(); 3]),
            expected
        );
    }

    #[test]
    fn test_preferences_inherited() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        let prefs = vec!["Package: *".to_string()];
        assert_eq!(edition.rewrite_apt_preferences(prefs.clone()), prefs);
    }

    #[test]
    fn test_upgrade_skipped() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        let exec = DryRunExecutor::new();
        edition.apt_upgrade_system(&exec).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn test_keys_and_automation_cleared() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        assert!(edition.rewrite_apt_automation(vec!["q".to_string()]).is_empty());
        assert!(edition
            .rewrite_apt_keys(AptKeys::new(vec!["k".to_string()], vec!["id".to_string()]))
            .is_empty());
    }

    #[test]
    fn test_config_items_unchanged() {
        let env = env();
        let edition = Minimal::new(&env).unwrap();
        let items = vec!["samtools".to_string()];
        assert_eq!(edition.rewrite_config_items("minimal", items.clone()), items);
    }
}
