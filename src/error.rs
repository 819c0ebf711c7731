//! Error handling for edition hooks.
//!
//! Only construction (distribution validation) and the side-effecting hooks
//! can fail. Pure rewrite hooks are infallible and never touch this type.

use thiserror::Error;

/// Main error type for edition selection and hook execution
#[derive(Error, Debug)]
pub enum EditionError {
    /// The environment's distribution is not supported by the edition.
    #[error("{edition} does not support distribution '{distribution}'")]
    UnsupportedDistribution {
        edition: String,
        distribution: String,
    },

    /// No edition is registered under the requested short name.
    #[error("Unknown edition: {0}")]
    UnknownEdition(String),

    /// A privileged command on the target host failed or could not start.
    #[error("Remote execution failed: {0}")]
    RemoteExecution(String),

    /// Environment configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for edition operations
pub type Result<T> = std::result::Result<T, EditionError>;

impl EditionError {
    /// Create an unsupported distribution error
    pub fn unsupported_distribution(
        edition: impl Into<String>,
        distribution: impl Into<String>,
    ) -> Self {
        Self::UnsupportedDistribution {
            edition: edition.into(),
            distribution: distribution.into(),
        }
    }

    /// Create an unknown edition error
    pub fn unknown_edition(name: impl Into<String>) -> Self {
        Self::UnknownEdition(name.into())
    }

    /// Create a remote execution error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteExecution(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error must abort the provisioning run at construction time.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::UnsupportedDistribution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditionError::unsupported_distribution("BioNode Edition", "ubuntu");
        assert_eq!(
            err.to_string(),
            "BioNode Edition does not support distribution 'ubuntu'"
        );

        let err = EditionError::unknown_edition("gentoo");
        assert_eq!(err.to_string(), "Unknown edition: gentoo");

        let err = EditionError::remote("apt-get exited with 100");
        assert_eq!(err.to_string(), "Remote execution failed: apt-get exited with 100");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "sudo not found");
        let err: EditionError = io_err.into();
        assert!(matches!(err, EditionError::Io(_)));
    }

    #[test]
    fn test_validation_failure_classification() {
        assert!(EditionError::unsupported_distribution("x", "y").is_validation_failure());
        assert!(!EditionError::remote("boom").is_validation_failure());
        assert!(!EditionError::config("bad").is_validation_failure());
    }
}
