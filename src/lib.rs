//! CloudBioLinux provisioning editions.
//!
//! Editions are named customization profiles that override hook points of a
//! shared provisioning pipeline: apt sources, pinning preferences, automation
//! answers, trusted keys, system upgrade, post-install actions and config
//! item lists. Command execution and post-install work are reached through
//! the `PrivilegedExecutor` and `PostInstallActions` traits.

pub mod apt;
pub mod cli;
pub mod editions;
pub mod environment;
pub mod error;
pub mod executor;
pub mod logic;
pub mod process_guard;
pub mod script_traits;
pub mod scripts;

// Re-export main types for convenience
pub use apt::{AptKeys, PinTier};
pub use editions::{
    select_edition, Base, BioNode, CloudBioLinux, Edition, EditionIdentity, EditionKind, Minimal,
};
pub use environment::Environment;
pub use error::{EditionError, Result};
pub use executor::{CommandOutput, DryRunExecutor, PrivilegedExecutor, SudoExecutor};
pub use logic::plan::{plan_edition, EditionPlan, PlanInputs};
pub use logic::postinstall::{PostInstallActions, ScriptPostInstall};
pub use logic::upgrade::run_upgrade;
pub use process_guard::{ChildRegistry, CommandProcessGroup, ProcessGuard};
pub use script_traits::ScriptArgs;
