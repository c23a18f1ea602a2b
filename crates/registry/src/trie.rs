//! Interface to the authenticated name trie.

use namechain_types::{Hash, NameRecord};

/// The persistent, authenticated key/value trie the registry commits
/// into.
///
/// The trie owns its node representation, serialization, and hashing;
/// the registry only issues mutations. During a terminal flush the
/// registry calls `set`/`delete` in ascending key order and never reads
/// back — lookups for names absent from an overlay go through a
/// separate query path owned by the caller.
///
/// `expanded` is forwarded verbatim from the flush caller; its effect
/// (e.g. keeping interior nodes unhashed for batched updates) is the
/// trie's own contract.
pub trait NameTrie {
    /// Error surfaced by trie mutations. Propagated unmodified out of
    /// [`crate::NameCache::flush_to`]; the registry performs no
    /// partial-flush recovery.
    type Error;

    /// Insert or overwrite the record stored under `key`.
    fn set(&mut self, key: &[u8], record: &NameRecord, expanded: bool) -> Result<(), Self::Error>;

    /// Remove the record stored under `key`, if any.
    fn delete(&mut self, key: &[u8], expanded: bool) -> Result<(), Self::Error>;

    /// The root hash committing to the trie's full contents.
    ///
    /// Deterministic given an identical ordered sequence of mutations;
    /// this is the value independent nodes agree on.
    fn root_hash(&mut self) -> Hash;
}
