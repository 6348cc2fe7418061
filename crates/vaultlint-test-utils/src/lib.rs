//! Shared test utilities for the vaultlint workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`vault`]: [`TestVault`] builder for real on-disk vault trees
//! - [`memory`]: [`MemoryFs`], an in-memory tree with scripted listing failures

pub mod memory;
pub mod vault;

pub use memory::MemoryFs;
pub use vault::{TestVault, spec};
