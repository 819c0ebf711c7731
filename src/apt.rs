//! Apt data shared by edition hooks.
//!
//! Repository lines, pinning tiers and key lists are kept here as Rust
//! constants and types so hooks can be checked without touching a host.
//! The `render_*` helpers turn hook output into the file bodies the
//! orchestrator writes to the target.

use serde::{Deserialize, Serialize};

/// Bio-Linux repository appended by BioNode and used alone by Minimal.
pub const BIO_LINUX_SOURCE: &str = "deb http://nebc.nerc.ac.uk/bio-linux/ unstable bio-linux";

/// Debian mirror used when the environment has no `debian_repository` override.
pub const DEFAULT_DEBIAN_MIRROR: &str = "http://ftp.us.debian.org/debian/";

/// Override key selecting the Debian mirror.
pub const DEBIAN_REPOSITORY_KEY: &str = "debian_repository";

/// Components enabled on every Debian repository line.
pub const DEBIAN_COMPONENTS: &str = "main contrib non-free";

/// Forced whole-system upgrade issued by the default upgrade hook.
pub const FORCED_UPGRADE_COMMAND: &str = "apt-get -y --force-yes upgrade";

/// Trusted key lists handed to the package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptKeys {
    /// Key files fetched and added directly.
    pub standalone: Vec<String>,
    /// Key IDs fetched from a keyserver.
    pub keyserver: Vec<String>,
}

impl AptKeys {
    pub fn new(standalone: Vec<String>, keyserver: Vec<String>) -> Self {
        Self {
            standalone,
            keyserver,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.keyserver.is_empty()
    }
}

/// Build a Debian repository line for `suite` on `mirror`.
pub fn debian_source(mirror: &str, suite: &str) -> String {
    format!("deb {mirror} {suite} {DEBIAN_COMPONENTS}")
}

/// One stanza of an apt preferences file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTier {
    /// Release selector, e.g. `a=stable` or `n=bookworm`.
    pub release: String,
    pub priority: u16,
}

impl PinTier {
    pub fn new(release: impl Into<String>, priority: u16) -> Self {
        Self {
            release: release.into(),
            priority,
        }
    }

    /// Lines of this stanza, without the separating blank line.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            "Package: *".to_string(),
            format!("Pin: release {}", self.release),
            format!("Pin-Priority: {}", self.priority),
        ]
    }
}

/// Flatten pinning tiers into preference lines, stanzas separated by a blank line.
pub fn preference_lines(tiers: &[PinTier]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, tier) in tiers.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(tier.to_lines());
    }
    lines
}

fn render_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a source list as the body of `sources.list`.
pub fn render_sources_list(sources: &[String]) -> String {
    render_lines(sources)
}

/// Render preference lines as the body of `/etc/apt/preferences`.
pub fn render_preferences(preferences: &[String]) -> String {
    render_lines(preferences)
}

/// Render automation answers as `debconf-set-selections` input.
pub fn render_debconf_selections(answers: &[String]) -> String {
    render_lines(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debian_source_line() {
        assert_eq!(
            debian_source(DEFAULT_DEBIAN_MIRROR, "bookworm-updates"),
            "deb http://ftp.us.debian.org/debian/ bookworm-updates main contrib non-free"
        );
    }

    #[test]
    fn test_pin_tier_lines() {
        let tier = PinTier::new("a=stable", 700);
        assert_eq!(
            tier.to_lines(),
            vec!["Package: *", "Pin: release a=stable", "Pin-Priority: 700"]
        );
    }

    #[test]
    fn test_preference_lines_separates_stanzas() {
        let tiers = [PinTier::new("a=stable", 700), PinTier::new("a=testing", 650)];
        let lines = preference_lines(&tiers);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Package: *");
        assert!(preference_lines(&[]).is_empty());
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render_sources_list(&[]), "");
        assert_eq!(render_preferences(&[]), "");
        assert_eq!(render_debconf_selections(&[]), "");
    }

    #[test]
    fn test_render_sources_list_trailing_newline() {
        let rendered = render_sources_list(&[BIO_LINUX_SOURCE.to_string()]);
        assert_eq!(
            rendered,
            "deb http://nebc.nerc.ac.uk/bio-linux/ unstable bio-linux\n"
        );
    }

    #[test]
    fn test_apt_keys_empty() {
        assert!(AptKeys::default().is_empty());
        let keys = AptKeys::new(vec![], vec!["7BD9BF62".to_string()]);
        assert!(!keys.is_empty());
    }
}
