//! Edition plan: the output of every pure hook for one edition.
//!
//! Lets an operator preview what an edition will write before anything
//! touches the target host.
//!
//! - **Pure logic**: only rewrite hooks run, no executor is involved
//! - **Rendered**: output uses the same renderers the orchestrator persists

use crate::apt::{render_debconf_selections, render_preferences, render_sources_list, AptKeys};
use crate::editions::Edition;

use std::fmt::Write as _;

/// Starting values fed into the rewrite hooks.
#[derive(Debug, Clone, Default)]
pub struct PlanInputs {
    pub sources: Vec<String>,
    pub preferences: Vec<String>,
    pub automation: Vec<String>,
    pub keys: AptKeys,
    /// Config category and its items, if config rewriting should be previewed.
    pub config_items: Option<(String, Vec<String>)>,
}

/// Results of every rewrite hook of one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionPlan {
    pub edition: String,
    pub version: String,
    pub sources: Vec<String>,
    pub preferences: Vec<String>,
    pub automation: Vec<String>,
    pub keys: AptKeys,
    pub config_items: Option<(String, Vec<String>)>,
}

/// Run every rewrite hook of `edition` over `inputs`.
pub fn plan_edition(edition: &dyn Edition, inputs: PlanInputs) -> EditionPlan {
    let config_items = inputs
        .config_items
        .map(|(category, items)| {
            let rewritten = edition.rewrite_config_items(&category, items);
            (category, rewritten)
        });

    EditionPlan {
        edition: edition.short_name().to_string(),
        version: edition.version().to_string(),
        sources: edition.rewrite_apt_sources_list(inputs.sources),
        preferences: edition.rewrite_apt_preferences(inputs.preferences),
        automation: edition.rewrite_apt_automation(inputs.automation),
        keys: edition.rewrite_apt_keys(inputs.keys),
        config_items,
    }
}

impl EditionPlan {
    /// Human-readable report, one section per artifact.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# edition: {} {}", self.edition, self.version);

        section(&mut out, "sources.list", &render_sources_list(&self.sources));
        section(&mut out, "preferences", &render_preferences(&self.preferences));
        section(
            &mut out,
            "debconf selections",
            &render_debconf_selections(&self.automation),
        );

        let mut keys = String::new();
        for key in &self.keys.standalone {
            let _ = writeln!(keys, "file {key}");
        }
        for key in &self.keys.keyserver {
            let _ = writeln!(keys, "keyserver {key}");
        }
        section(&mut out, "keys", &keys);

        if let Some((category, items)) = &self.config_items {
            let body = if items.is_empty() {
                String::new()
            } else {
                format!("{}\n", items.join("\n"))
            };
            section(&mut out, &format!("config items: {category}"), &body);
        }

        out
    }
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "\n## {title}");
    if body.is_empty() {
        out.push_str("(none)\n");
    } else {
        out.push_str(body);
    }
}
