//! Test helpers for the namechain registry.
//!
//! Provides deterministic [`NameRecord`] fixtures and two [`NameTrie`]
//! implementations: [`MemoryTrie`], which records every mutation it
//! receives so tests can compare exact flush sequences, and
//! [`FailingTrie`], which fails every mutation so tests can check error
//! propagation.

use namechain_registry::NameTrie;
use namechain_types::{
    Address, BlockHeight, Hash, Name, NameOp, NameRecord, NameScript, OutPoint, Txid,
};
use std::collections::BTreeMap;

/// Build a deterministic record for tests.
///
/// `tag` distinguishes records from each other; `height` is the
/// registration height. Equal arguments always produce equal records.
/// Goes through [`NameRecord::from_script`] so the constructor contract
/// is exercised on every fixture.
pub fn record_at(tag: u8, height: u64) -> NameRecord {
    let script = NameScript::new(
        NameOp::Update {
            name: Name::new(vec![b'n', tag]),
            value: vec![b'v', tag],
        },
        Address::from_bytes(vec![0x51, tag]),
    );
    NameRecord::from_script(
        BlockHeight(height),
        OutPoint::new(Txid([tag; 32]), 0),
        &script,
    )
}

/// One recorded trie mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieOp {
    /// A `set` call.
    Set {
        /// Raw key bytes.
        key: Vec<u8>,
        /// The record written.
        record: NameRecord,
        /// The forwarded expanded flag.
        expanded: bool,
    },

    /// A `delete` call.
    Delete {
        /// Raw key bytes.
        key: Vec<u8>,
        /// The forwarded expanded flag.
        expanded: bool,
    },
}

impl TrieOp {
    /// The expanded flag the mutation carried.
    pub fn expanded(&self) -> bool {
        match self {
            TrieOp::Set { expanded, .. } | TrieOp::Delete { expanded, .. } => *expanded,
        }
    }
}

/// An in-memory name trie that journals every mutation.
///
/// The root hash is blake3 over the sorted contents, so two tries that
/// received equivalent mutations agree on it. Real nodes use a
/// persistent authenticated trie; this stand-in only has to be
/// deterministic and content-addressed.
#[derive(Debug, Clone, Default)]
pub struct MemoryTrie {
    contents: BTreeMap<Vec<u8>, NameRecord>,
    ops: Vec<TrieOp>,
}

impl MemoryTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mutation received, in call order.
    pub fn ops(&self) -> &[TrieOp] {
        &self.ops
    }

    /// Look up a stored record.
    pub fn get(&self, key: &[u8]) -> Option<&NameRecord> {
        self.contents.get(key)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Check if the trie stores nothing.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl NameTrie for MemoryTrie {
    type Error = std::convert::Infallible;

    fn set(&mut self, key: &[u8], record: &NameRecord, expanded: bool) -> Result<(), Self::Error> {
        self.ops.push(TrieOp::Set {
            key: key.to_vec(),
            record: record.clone(),
            expanded,
        });
        self.contents.insert(key.to_vec(), record.clone());
        Ok(())
    }

    fn delete(&mut self, key: &[u8], expanded: bool) -> Result<(), Self::Error> {
        self.ops.push(TrieOp::Delete {
            key: key.to_vec(),
            expanded,
        });
        self.contents.remove(key);
        Ok(())
    }

    fn root_hash(&mut self) -> Hash {
        let mut hasher_input: Vec<u8> = Vec::new();
        for (key, record) in &self.contents {
            hasher_input.extend_from_slice(&(key.len() as u32).to_le_bytes());
            hasher_input.extend_from_slice(key);
            hasher_input.extend_from_slice(record.hash().as_bytes());
        }
        Hash::from_bytes(&hasher_input)
    }
}

/// Error produced by [`FailingTrie`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("trie backend unavailable")]
pub struct TrieUnavailable;

/// A trie whose every mutation fails.
///
/// Used to verify that flush errors propagate unmodified.
#[derive(Debug, Clone, Default)]
pub struct FailingTrie;

impl NameTrie for FailingTrie {
    type Error = TrieUnavailable;

    fn set(
        &mut self,
        _key: &[u8],
        _record: &NameRecord,
        _expanded: bool,
    ) -> Result<(), Self::Error> {
        Err(TrieUnavailable)
    }

    fn delete(&mut self, _key: &[u8], _expanded: bool) -> Result<(), Self::Error> {
        Err(TrieUnavailable)
    }

    fn root_hash(&mut self) -> Hash {
        Hash::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_at_is_deterministic() {
        assert_eq!(record_at(3, 7), record_at(3, 7));
        assert_ne!(record_at(3, 7), record_at(4, 7));
    }

    #[test]
    fn test_memory_trie_root_tracks_contents() {
        let mut a = MemoryTrie::new();
        let mut b = MemoryTrie::new();
        assert_eq!(a.root_hash(), b.root_hash());

        a.set(b"d/x", &record_at(1, 5), false).unwrap();
        assert_ne!(a.root_hash(), b.root_hash());

        b.set(b"d/x", &record_at(1, 5), false).unwrap();
        assert_eq!(a.root_hash(), b.root_hash());

        // Root depends on contents, not on mutation history.
        a.set(b"d/y", &record_at(2, 6), false).unwrap();
        a.delete(b"d/y", false).unwrap();
        assert_eq!(a.root_hash(), b.root_hash());
    }
}
