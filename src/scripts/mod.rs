//! Type-safe script argument modules.
//!
//! Each struct maps Rust fields to the exact CLI flags and environment
//! variables expected by the corresponding helper script.

pub mod post_install;
