//! Logic modules: edition hooks turned into previews and finishing actions.
//!
//! # Modules
//!
//! - `plan`: runs every pure hook of an edition and renders the result
//! - `postinstall`: post-install actions triggered by edition hooks
//! - `upgrade`: resets and rewrites the package source file, then upgrades

pub mod plan;
pub mod postinstall;
pub mod upgrade;
