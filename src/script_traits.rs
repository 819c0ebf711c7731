//! Type-safe helper script arguments.
//!
//! Post-install helper scripts are described by Rust structs implementing
//! `ScriptArgs` instead of ad-hoc string vectors. The struct definition is
//! the contract with the script's argument parser.

/// Trait for typed helper script arguments.
///
/// # Contract
///
/// - `to_cli_args()`: CLI arguments exactly as the script parses them.
/// - `get_env_vars()`: environment variables the script reads.
/// - `script_name()`: script filename; the directory is resolved by the caller.
///
/// # Example
///
/// ```ignore
/// use cloudbio_editions::scripts::post_install::FreenxScriptsArgs;
///
/// let args = FreenxScriptsArgs {
///     distribution: "ubuntu".into(),
///     dist_name: "jammy".into(),
/// };
///
/// let cli_args = args.to_cli_args(); // ["--distribution", "ubuntu", "--codename", "jammy"]
/// ```
pub trait ScriptArgs {
    /// Convert struct fields to CLI arguments.
    fn to_cli_args(&self) -> Vec<String>;

    /// Environment variables as key-value pairs.
    fn get_env_vars(&self) -> Vec<(String, String)>;

    /// Script filename without directory, e.g. `install_freenx_scripts.sh`.
    fn script_name(&self) -> &'static str;
}
