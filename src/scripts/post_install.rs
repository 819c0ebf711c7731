//! Type-safe arguments for CloudBioLinux post-install scripts.
//!
//! - `FreenxScriptsArgs` for `install_freenx_scripts.sh`
//! - `CloudmanConfigArgs` for `configure_cloudman.sh`

use crate::environment::Environment;
use crate::script_traits::ScriptArgs;

/// Override key naming the bucket CloudMan boots from.
pub const CLOUDMAN_BUCKET_KEY: &str = "cloudman_bucket";

// ============================================================================
// FreeNX remote desktop scripts
// ============================================================================

/// Type-safe arguments for `install_freenx_scripts.sh`.
///
/// | Rust Field     | CLI Flag         |
/// |----------------|------------------|
/// | `distribution` | `--distribution` |
/// | `dist_name`    | `--codename`     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreenxScriptsArgs {
    pub distribution: String,
    pub dist_name: String,
}

impl FreenxScriptsArgs {
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            distribution: env.distribution.clone(),
            dist_name: env.dist_name.clone(),
        }
    }
}

impl ScriptArgs for FreenxScriptsArgs {
    fn to_cli_args(&self) -> Vec<String> {
        vec![
            "--distribution".to_string(),
            self.distribution.clone(),
            "--codename".to_string(),
            self.dist_name.clone(),
        ]
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        vec![]
    }

    fn script_name(&self) -> &'static str {
        "install_freenx_scripts.sh"
    }
}

// ============================================================================
// CloudMan configuration
// ============================================================================

/// Type-safe arguments for `configure_cloudman.sh`.
///
/// The bucket is passed through `CLOUDMAN_BUCKET` when the environment
/// carries a `cloudman_bucket` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudmanConfigArgs {
    pub version: String,
    pub bucket: Option<String>,
}

impl CloudmanConfigArgs {
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            version: env.version.clone(),
            bucket: env.get(CLOUDMAN_BUCKET_KEY).map(str::to_string),
        }
    }
}

impl ScriptArgs for CloudmanConfigArgs {
    fn to_cli_args(&self) -> Vec<String> {
        vec!["--version".to_string(), self.version.clone()]
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        match self.bucket {
            Some(ref bucket) => vec![("CLOUDMAN_BUCKET".to_string(), bucket.clone())],
            None => vec![],
        }
    }

    fn script_name(&self) -> &'static str {
        "configure_cloudman.sh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freenx_args() {
        let env = Environment::new("ubuntu", "jammy", "1.0");
        let args = FreenxScriptsArgs::from_environment(&env);
        assert_eq!(
            args.to_cli_args(),
            vec!["--distribution", "ubuntu", "--codename", "jammy"]
        );
        assert!(args.get_env_vars().is_empty());
        assert_eq!(args.script_name(), "install_freenx_scripts.sh");
    }

    #[test]
    fn test_cloudman_args_without_bucket() {
        let env = Environment::new("ubuntu", "jammy", "1.0");
        let args = CloudmanConfigArgs::from_environment(&env);
        assert_eq!(args.to_cli_args(), vec!["--version", "1.0"]);
        assert!(args.get_env_vars().is_empty());
    }

    #[test]
    fn test_cloudman_args_with_bucket() {
        let env = Environment::new("ubuntu", "jammy", "1.0")
            .with_override(CLOUDMAN_BUCKET_KEY, "cloudman-galaxy");
        let args = CloudmanConfigArgs::from_environment(&env);
        assert_eq!(
            args.get_env_vars(),
            vec![("CLOUDMAN_BUCKET".to_string(), "cloudman-galaxy".to_string())]
        );
        assert_eq!(args.script_name(), "configure_cloudman.sh");
    }
}
