//! Overlay name cache for the namechain registry.
//!
//! This crate provides [`NameCache`], the in-memory layer of pending
//! name changes that sits between block processing and the persistent,
//! authenticated name trie. A cache captures registrations, updates,
//! deletions, optional per-name history, and expiration-index edits for
//! one processing context (a block under evaluation, or a client view),
//! without touching the layer underneath.
//!
//! Caches compose in two ways:
//!
//! - [`NameCache::apply_to`] folds one layer's changes into a parent
//!   layer. Pure in-memory composition, no hashing.
//! - [`NameCache::flush_to`] commits a layer's entries and deletions
//!   into a [`NameTrie`] in ascending key order, after which the trie's
//!   root hash is the consensus commitment for the new state.
//!
//! Each cache exclusively owns its storage. Cross-layer visibility
//! happens only through the two apply operations, never through shared
//! maps, so multiple caches (chain tip, speculative mempool view) can
//! coexist without corrupting each other.

mod cache;
mod config;
mod expire;
mod trie;

pub use cache::NameCache;
pub use config::RegistryConfig;
pub use expire::ExpireEntry;
pub use trie::NameTrie;
