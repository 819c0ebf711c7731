//! Privileged command execution on the target host.
//!
//! Editions never spawn processes themselves. Side-effecting hooks receive a
//! `PrivilegedExecutor` and hand it a shell command line; failures come back
//! as [`EditionError::RemoteExecution`] and are propagated unchanged.
//!
//! - `SudoExecutor`: runs `sudo sh -c <command>` in its own process group,
//!   registered with [`ChildRegistry`] so an interrupted run cleans up.
//! - `DryRunExecutor`: records and logs commands without running anything.

use crate::error::{EditionError, Result};
use crate::process_guard::{ChildRegistry, CommandProcessGroup};
use crate::script_traits::ScriptArgs;
use log::info;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Captured output of a privileged command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code (None if terminated by signal or never run).
    pub exit_code: Option<i32>,
}

/// Capability to run a privileged shell command on the provisioning target.
pub trait PrivilegedExecutor {
    /// Run `command` through a shell with root privileges.
    ///
    /// Returns `Err` when the command cannot be started or exits non-zero.
    fn run_privileged(&self, command: &str) -> Result<CommandOutput>;
}

/// Runs commands locally through `sh -c`, prefixed with `sudo` unless already root.
#[derive(Debug, Clone)]
pub struct SudoExecutor {
    use_sudo: bool,
}

impl SudoExecutor {
    /// Use sudo only when the current process is not root.
    pub fn new() -> Self {
        Self {
            use_sudo: !nix::unistd::geteuid().is_root(),
        }
    }

    pub fn with_sudo(use_sudo: bool) -> Self {
        Self { use_sudo }
    }

    fn build_command(&self, command: &str) -> Command {
        let mut cmd = if self.use_sudo {
            let mut cmd = Command::new("sudo");
            cmd.args(["-n", "sh", "-c", command]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        };
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .in_new_process_group();
        cmd
    }
}

impl Default for SudoExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegedExecutor for SudoExecutor {
    fn run_privileged(&self, command: &str) -> Result<CommandOutput> {
        info!("run_privileged: sudo={} {}", self.use_sudo, command);

        let child = self
            .build_command(command)
            .spawn()
            .map_err(|e| EditionError::remote(format!("failed to spawn `{}`: {}", command, e)))?;
        let pid = child.id();

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.register(pid);
        }

        let waited = child.wait_with_output();

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.unregister(pid);
        }

        let output = waited
            .map_err(|e| EditionError::remote(format!("failed waiting for `{}`: {}", command, e)))?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        };

        if output.status.success() {
            Ok(result)
        } else {
            let code = result.exit_code.unwrap_or(-1);
            info!("`{}` failed with exit code {}", command, code);
            Err(EditionError::remote(format!(
                "`{}` failed (exit code {}): {}",
                command,
                code,
                result.stderr.trim()
            )))
        }
    }
}

/// Records every command instead of running it.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    commands: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.commands.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl PrivilegedExecutor for DryRunExecutor {
    fn run_privileged(&self, command: &str) -> Result<CommandOutput> {
        info!("[dry-run] would run: {}", command);
        self.commands
            .lock()
            .map_err(|_| EditionError::remote("dry-run command log poisoned"))?
            .push(command.to_string());
        Ok(CommandOutput {
            exit_code: Some(0),
            ..CommandOutput::default()
        })
    }
}

/// Quote a word for POSIX `sh`.
pub fn shell_quote(word: &str) -> String {
    if !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c))
    {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Build the shell command line that runs a helper script from `scripts_dir`.
pub fn script_command<T: ScriptArgs>(scripts_dir: &Path, args: &T) -> String {
    let script_path = scripts_dir.join(args.script_name());
    let mut parts: Vec<String> = args
        .get_env_vars()
        .iter()
        .map(|(key, value)| format!("{}={}", key, shell_quote(value)))
        .collect();
    parts.push("bash".to_string());
    parts.push(shell_quote(&script_path.display().to_string()));
    parts.extend(args.to_cli_args().iter().map(|a| shell_quote(a)));
    parts.join(" ")
}

/// Run a typed helper script with root privileges.
pub fn run_script<T: ScriptArgs>(
    executor: &dyn PrivilegedExecutor,
    scripts_dir: &Path,
    args: &T,
) -> Result<CommandOutput> {
    let command = script_command(scripts_dir, args);
    info!("run_script: {}", args.script_name());
    executor.run_privileged(&command)
}
