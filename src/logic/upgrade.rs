//! System upgrade flow for one edition.
//!
//! The package source file is reset by `check_packages_source`, rewritten
//! from the edition's `rewrite_apt_sources_list` output and only then is the
//! upgrade hook run, so the target never upgrades against an empty list
//! written by this flow.

use crate::apt::render_sources_list;
use crate::editions::Edition;
use crate::error::Result;
use crate::executor::{shell_quote, PrivilegedExecutor};

use log::{info, warn};
use std::path::Path;

/// Shell command that replaces `path` with `content` on the target.
pub fn write_file_command(path: &Path, content: &str) -> String {
    format!(
        "printf '%s' {} > {}",
        shell_quote(content),
        shell_quote(&path.display().to_string())
    )
}

/// Reset, rewrite and upgrade in that order.
///
/// `sources` are the candidate repository lines handed to the edition. When
/// the edition returns no lines the existing source file is left untouched.
pub fn run_upgrade(
    edition: &dyn Edition,
    executor: &dyn PrivilegedExecutor,
    sources: Vec<String>,
) -> Result<()> {
    let env = edition.environment();
    edition.check_packages_source(executor)?;

    let sources = edition.rewrite_apt_sources_list(sources);
    if sources.is_empty() {
        warn!(
            "{}: no package sources to write, keeping {:?}",
            edition.short_name(),
            env.sources_file
        );
    } else {
        info!(
            "{}: writing {} source line(s) to {:?}",
            edition.short_name(),
            sources.len(),
            env.sources_file
        );
        let body = render_sources_list(&sources);
        executor.run_privileged(&write_file_command(&env.sources_file, &body))?;
    }

    edition.apt_upgrade_system(executor)
}
