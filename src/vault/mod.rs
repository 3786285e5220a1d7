//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `EntrySet` types (`entry`)
//! - Whole-file decrypt-on-read / encrypt-on-write persistence (`store`)
//! - The add / find / delete operations on top of the store (`service`)

pub mod entry;
pub mod service;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, EntrySet, Vault};
pub use service::{AddedEntry, ServiceSummary, VaultService};
pub use store::VaultStore;
