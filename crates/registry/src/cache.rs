//! The overlay name cache.

use crate::{ExpireEntry, NameTrie, RegistryConfig};
use namechain_types::{BlockHeight, Name, NameHistory, NameRecord};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// One overlay layer of pending name changes.
///
/// A cache records which names this layer overrides (`entries`), which
/// it removes (`deleted`), pending history updates, and pending
/// expiration-index toggles. It never resolves against a parent layer:
/// [`NameCache::get`] answers only from this layer, and callers consult
/// parent layers or the trie for names absent here.
///
/// All four maps use ordered containers. Merge and flush iterate them
/// in ascending key order, so the mutation sequence sent to the trie
/// depends only on the final contents, never on the order mutations
/// were recorded — a prerequisite for independent nodes computing
/// bit-for-bit identical root hashes.
///
/// For any name, `entries` and `deleted` are mutually exclusive:
/// [`NameCache::set`] clears the deletion mark and
/// [`NameCache::remove`] drops the entry.
#[derive(Debug, Clone)]
pub struct NameCache {
    config: RegistryConfig,

    /// Names whose current state this layer overrides.
    entries: BTreeMap<Name, NameRecord>,

    /// Names this layer removes. Overrides any lower layer's value.
    deleted: BTreeSet<Name>,

    /// Pending per-name history updates. Only populated when history
    /// tracking is enabled.
    history: BTreeMap<Name, NameHistory>,

    /// Pending expiration-index edits: true adds a marker, false
    /// cancels one.
    expire_index: BTreeMap<ExpireEntry, bool>,
}

impl NameCache {
    /// Create an empty cache layer.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: BTreeMap::new(),
            deleted: BTreeSet::new(),
            history: BTreeMap::new(),
            expire_index: BTreeMap::new(),
        }
    }

    /// The configuration this layer was created with.
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Look up a name's record in this layer only.
    ///
    /// Returns `None` both for names this layer knows nothing about and
    /// for names it has deleted; a caller that needs the distinction
    /// checks [`NameCache::is_deleted`] before falling through to a
    /// parent layer or the trie.
    pub fn get(&self, name: &Name) -> Option<&NameRecord> {
        self.entries.get(name)
    }

    /// Whether this layer marks `name` as removed.
    pub fn is_deleted(&self, name: &Name) -> bool {
        self.deleted.contains(name)
    }

    /// Look up a name's pending history update in this layer.
    ///
    /// # Panics
    ///
    /// Panics if history tracking is disabled; querying history without
    /// it is a caller bug.
    pub fn get_history(&self, name: &Name) -> Option<&NameHistory> {
        assert!(
            self.config.track_history,
            "history queried with history tracking disabled"
        );
        self.history.get(name)
    }

    /// Install or overwrite a name's record, clearing any deletion mark.
    pub fn set(&mut self, name: Name, record: NameRecord) {
        self.deleted.remove(&name);
        self.entries.insert(name, record);
    }

    /// Install or overwrite a name's pending history.
    ///
    /// # Panics
    ///
    /// Panics if history tracking is disabled.
    pub fn set_history(&mut self, name: Name, history: NameHistory) {
        assert!(
            self.config.track_history,
            "history written with history tracking disabled"
        );
        self.history.insert(name, history);
    }

    /// Mark a name as removed, dropping any entry for it.
    ///
    /// After this, [`NameCache::get`] reports the name absent, and a
    /// later merge or flush propagates the removal to the target.
    pub fn remove(&mut self, name: Name) {
        self.entries.remove(&name);
        self.deleted.insert(name);
    }

    /// Record that `name` becomes expiration-eligible at `height`.
    pub fn add_expire_index(&mut self, name: Name, height: BlockHeight) {
        self.expire_index
            .insert(ExpireEntry::new(height, name), true);
    }

    /// Record cancellation of the expiration marker for `name` at
    /// exactly `height`.
    ///
    /// When a name's effective expiry height changes, block processing
    /// cancels the marker at the old height and adds one at the new
    /// height; this method only records the cancellation half.
    pub fn remove_expire_index(&mut self, name: Name, height: BlockHeight) {
        self.expire_index
            .insert(ExpireEntry::new(height, name), false);
    }

    /// Apply all expiration toggles recorded at exactly `height` to the
    /// caller's running set of names.
    ///
    /// Scans the index in ascending order from the first entry at
    /// `height` and stops at the first entry beyond it. A true flag
    /// inserts the name into `names`, a false flag erases it, so after
    /// the call `names` holds the net set of active markers for that
    /// height. Markers at other heights are untouched; callers invoke
    /// this once per height of interest.
    pub fn update_names_for_height(&self, height: BlockHeight, names: &mut BTreeSet<Name>) {
        let seek = ExpireEntry::first_at(height);
        for (entry, &active) in self.expire_index.range(seek..) {
            debug_assert!(entry.height >= height);
            if entry.height > height {
                break;
            }

            if active {
                names.insert(entry.name.clone());
            } else {
                names.remove(&entry.name);
            }
        }
    }

    /// Fold this layer's changes into a parent layer.
    ///
    /// Applies entries, then deletions, then history, then a raw
    /// overwrite of the parent's expiration-index edits. Deletions go
    /// second so that a set-then-removed name ends up removed in the
    /// parent. Pure in-memory composition; no trie, no hashing.
    pub fn apply_to(&self, parent: &mut NameCache) {
        trace!(
            entries = self.entries.len(),
            deleted = self.deleted.len(),
            expire_edits = self.expire_index.len(),
            "merging cache layer into parent"
        );

        for (name, record) in &self.entries {
            parent.set(name.clone(), record.clone());
        }

        for name in &self.deleted {
            parent.remove(name.clone());
        }

        for (name, history) in &self.history {
            parent.set_history(name.clone(), history.clone());
        }

        for (entry, &active) in &self.expire_index {
            parent.expire_index.insert(entry.clone(), active);
        }
    }

    /// Commit this layer's entries and deletions into the trie.
    ///
    /// Sets are issued first, then deletes, each in ascending key
    /// order. History and expiration-index changes stay cache-only.
    /// The first trie error aborts the flush and propagates unmodified;
    /// there is no partial-flush recovery here — callers treat a flush
    /// as all-or-nothing. Root-hash recomputation is sequenced after
    /// this returns, by the caller or the trie itself.
    pub fn flush_to<T: NameTrie>(&self, trie: &mut T, expanded: bool) -> Result<(), T::Error> {
        debug!(
            entries = self.entries.len(),
            deleted = self.deleted.len(),
            expanded,
            "flushing cache layer to trie"
        );

        for (name, record) in &self.entries {
            trie.set(name.as_bytes(), record, expanded)?;
        }

        for name in &self.deleted {
            trie.delete(name.as_bytes(), expanded)?;
        }

        Ok(())
    }

    /// Check whether this layer records no changes at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
            && self.deleted.is_empty()
            && self.history.is_empty()
            && self.expire_index.is_empty()
    }

    /// Drop all recorded changes, keeping the configuration.
    ///
    /// Used after a layer has been folded into its parent and is about
    /// to be reused for the next block.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deleted.clear();
        self.history.clear();
        self.expire_index.clear();
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
