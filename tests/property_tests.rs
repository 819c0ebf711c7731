//! Property-based tests for edition hooks
//!
//! Uses proptest to check hook laws over arbitrary inputs:
//! - EditionKind string round-trips
//! - Identity rewrites for Base and CloudBioLinux
//! - Fixed outputs for BioNode and Minimal regardless of input
//! - Config item augmentation never drops or duplicates entries

use cloudbio_editions::{select_edition, AptKeys, EditionKind, Environment};
use proptest::prelude::*;

/// Strategy for generating every EditionKind variant
fn kind_strategy() -> impl Strategy<Value = EditionKind> {
    prop_oneof![
        Just(EditionKind::Base),
        Just(EditionKind::CloudBioLinux),
        Just(EditionKind::BioNode),
        Just(EditionKind::Minimal),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9:/. _-]{0,40}"
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..8)
}

fn distribution_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("debian".to_string()),
        Just("ubuntu".to_string()),
        "[a-z]{3,10}",
    ]
}

proptest! {
    /// EditionKind: to_string → parse round-trip is identity
    #[test]
    fn kind_roundtrip(kind in kind_strategy()) {
        let parsed: EditionKind = kind.to_string().parse().expect("Should parse");
        prop_assert_eq!(kind, parsed);
    }

    /// Base and CloudBioLinux hand every apt input back unchanged
    #[test]
    fn identity_editions_preserve_input(
        sources in lines_strategy(),
        prefs in lines_strategy(),
        answers in lines_strategy(),
        standalone in lines_strategy(),
        keyserver in lines_strategy(),
    ) {
        let env = Environment::new("ubuntu", "jammy", "1.0");
        for name in ["biolinux", "cloudbiolinux"] {
            let edition = select_edition(name, &env).unwrap();
            prop_assert_eq!(edition.rewrite_apt_sources_list(sources.clone()), sources.clone());
            prop_assert_eq!(edition.rewrite_apt_preferences(prefs.clone()), prefs.clone());
            prop_assert_eq!(edition.rewrite_apt_automation(answers.clone()), answers.clone());
            let keys = AptKeys::new(standalone.clone(), keyserver.clone());
            prop_assert_eq!(edition.rewrite_apt_keys(keys.clone()), keys);
        }
    }

    /// Minimal always yields exactly the Bio-Linux source
    #[test]
    fn minimal_sources_ignore_input(sources in lines_strategy(), dist in distribution_strategy()) {
        let env = Environment::new(dist, "stable", "1.0");
        let edition = select_edition("minimal", &env).unwrap();
        prop_assert_eq!(
            edition.rewrite_apt_sources_list(sources),
            vec!["deb http://nebc.nerc.ac.uk/bio-linux/ unstable bio-linux".to_string()]
        );
    }

    /// BioNode output depends only on the environment
    #[test]
    fn bionode_sources_ignore_input(
        a in lines_strategy(),
        b in lines_strategy(),
        dist in distribution_strategy(),
    ) {
        let env = Environment::new(dist, "bookworm", "1.0");
        let edition = select_edition("bionode", &env).unwrap();
        let first = edition.rewrite_apt_sources_list(a);
        let second = edition.rewrite_apt_sources_list(b);
        prop_assert_eq!(&first, &second);
        let expected_len = if env.is_debian() { 4 } else { 1 };
        prop_assert_eq!(first.len(), expected_len);
    }

    /// BioNode and Minimal never return keys or automation answers
    #[test]
    fn cleared_hooks_stay_empty(
        answers in lines_strategy(),
        standalone in lines_strategy(),
        keyserver in lines_strategy(),
    ) {
        let env = Environment::new("debian", "bookworm", "1.0");
        for name in ["bionode", "minimal"] {
            let edition = select_edition(name, &env).unwrap();
            prop_assert!(edition.rewrite_apt_automation(answers.clone()).is_empty());
            let input = AptKeys::new(standalone.clone(), keyserver.clone());
            let keys = edition.rewrite_apt_keys(input);
            prop_assert!(keys.is_empty());
        }
    }

    /// CloudBioLinux keeps the input as a prefix and adds each required item once
    #[test]
    fn cloudbiolinux_config_items_superset(
        category in "[a-z]{1,10}",
        items in prop::collection::vec(
            prop_oneof![Just("galaxy".to_string()), Just("cloudman".to_string()), "[a-z]{1,8}"],
            0..6,
        ),
    ) {
        let env = Environment::new("ubuntu", "jammy", "1.0");
        let edition = select_edition("cloudbiolinux", &env).unwrap();
        let out = edition.rewrite_config_items(&category, items.clone());

        prop_assert_eq!(&out[..items.len()], &items[..]);
        for required in ["galaxy", "galaxy_tools", "cloudman"] {
            prop_assert!(out.iter().any(|i| i == required));
            let added = out[items.len()..].iter().filter(|i| *i == required).count();
            let already = items.iter().any(|i| i == required);
            prop_assert_eq!(added, if already { 0 } else { 1 });
        }
    }

    /// Every rewrite hook of every edition is deterministic
    #[test]
    fn hooks_are_deterministic(kind in kind_strategy(), sources in lines_strategy()) {
        let env = Environment::new("debian", "bookworm", "1.0");
        let edition = select_edition(kind.short_name(), &env).unwrap();
        prop_assert_eq!(
            edition.rewrite_apt_sources_list(sources.clone()),
            edition.rewrite_apt_sources_list(sources)
        );
        prop_assert_eq!(
            edition.rewrite_apt_preferences(vec![]),
            edition.rewrite_apt_preferences(vec![])
        );
    }
}
