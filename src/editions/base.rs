//! Base edition: every hook keeps its default behavior.

use super::{Edition, EditionIdentity, EditionKind};
use crate::environment::Environment;
use crate::error::Result;

/// BioLinux base edition; supports any distribution.
#[derive(Debug, Clone)]
pub struct Base<'env> {
    identity: EditionIdentity,
    env: &'env Environment,
}

impl<'env> Base<'env> {
    pub fn new(env: &'env Environment) -> Result<Self> {
        let edition = Self {
            identity: EditionIdentity::for_kind(EditionKind::Base, env),
            env,
        };
        edition.check_distribution()?;
        Ok(edition)
    }
}

impl Edition for Base<'_> {
    fn identity(&self) -> &EditionIdentity {
        &self.identity
    }

    fn environment(&self) -> &Environment {
        self.env
    }
}
