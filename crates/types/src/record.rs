//! Name state snapshots and per-name history.

use crate::{Address, BlockHeight, Hash, NameScript, OutPoint};
use serde::{Deserialize, Serialize};

/// The current registered state of one name.
///
/// A record captures the value last associated with the name plus its
/// provenance: the height at which this state became current, the
/// transaction output that created it, and the owning address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Opaque value payload last associated with the name.
    pub value: Vec<u8>,

    /// Block height at which this record became current.
    pub height: BlockHeight,

    /// The transaction output that created this state. Used to detect
    /// spends and double-updates.
    pub outpoint: OutPoint,

    /// Owning address recovered from the registering transaction.
    pub address: Address,
}

impl NameRecord {
    /// Build a record from a decoded update-class name operation.
    ///
    /// The script must already have been validated by the transaction
    /// decoder; no validation happens here.
    ///
    /// # Panics
    ///
    /// Panics if the script is not an update-class operation. An intent
    /// carries no resolvable value, so constructing a record from one is
    /// a caller bug, not a data error.
    pub fn from_script(height: BlockHeight, outpoint: OutPoint, script: &NameScript) -> Self {
        assert!(
            script.is_any_update(),
            "name record requires an update-class operation"
        );
        Self {
            value: script.op_value().to_vec(),
            height,
            outpoint,
            address: script.address().clone(),
        }
    }

    /// Canonical hash commitment of this record.
    ///
    /// Trie implementations fold these into the root hash, so the
    /// encoding is fixed: value hash, height, outpoint, address hash,
    /// each length-independent.
    pub fn hash(&self) -> Hash {
        let value_hash = Hash::from_bytes(&self.value);
        let address_hash = Hash::from_bytes(self.address.as_bytes());
        Hash::from_parts(&[
            value_hash.as_bytes(),
            &self.height.0.to_le_bytes(),
            self.outpoint.txid.as_bytes(),
            &self.outpoint.vout.to_le_bytes(),
            address_hash.as_bytes(),
        ])
    }
}

/// Past states of one name, oldest first.
///
/// Histories are append-only during block connection; disconnecting a
/// block pops the most recent entry back off.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameHistory(Vec<NameRecord>);

impl NameHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded past states.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a record as the new most recent past state.
    pub fn push(&mut self, record: NameRecord) {
        self.0.push(record);
    }

    /// Remove and return the most recent past state.
    ///
    /// Used when disconnecting a block: the record pushed when the
    /// block was connected is taken back off.
    pub fn pop(&mut self) -> Option<NameRecord> {
        self.0.pop()
    }

    /// The most recent past state, if any.
    pub fn latest(&self) -> Option<&NameRecord> {
        self.0.last()
    }

    /// Iterate over past states, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &NameRecord> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Name, NameOp, Txid};

    fn outpoint(n: u8) -> OutPoint {
        OutPoint::new(Txid([n; 32]), 0)
    }

    fn update_script(value: &[u8]) -> NameScript {
        NameScript::new(
            NameOp::Update {
                name: Name::from("d/example"),
                value: value.to_vec(),
            },
            Address::from_bytes(vec![0x51]),
        )
    }

    #[test]
    fn test_from_script_populates_all_fields() {
        let script = update_script(b"v1");
        let record = NameRecord::from_script(BlockHeight(42), outpoint(1), &script);

        assert_eq!(record.value, b"v1");
        assert_eq!(record.height, BlockHeight(42));
        assert_eq!(record.outpoint, outpoint(1));
        assert_eq!(record.address, *script.address());
    }

    #[test]
    #[should_panic(expected = "update-class operation")]
    fn test_from_script_rejects_intent() {
        let intent = NameScript::new(
            NameOp::Intent {
                commitment: Hash::from_bytes(b"commitment"),
            },
            Address::from_bytes(vec![0x51]),
        );
        NameRecord::from_script(BlockHeight(1), outpoint(1), &intent);
    }

    #[test]
    fn test_record_hash_depends_on_every_field() {
        let base = NameRecord::from_script(BlockHeight(10), outpoint(1), &update_script(b"v"));

        let mut changed = base.clone();
        changed.value = b"w".to_vec();
        assert_ne!(base.hash(), changed.hash());

        let mut changed = base.clone();
        changed.height = BlockHeight(11);
        assert_ne!(base.hash(), changed.hash());

        let mut changed = base.clone();
        changed.outpoint = outpoint(2);
        assert_ne!(base.hash(), changed.hash());

        let mut changed = base.clone();
        changed.address = Address::from_bytes(vec![0x52]);
        assert_ne!(base.hash(), changed.hash());

        assert_eq!(base.hash(), base.clone().hash());
    }

    #[test]
    fn test_history_push_pop_is_lifo() {
        let r1 = NameRecord::from_script(BlockHeight(1), outpoint(1), &update_script(b"v1"));
        let r2 = NameRecord::from_script(BlockHeight(2), outpoint(2), &update_script(b"v2"));

        let mut history = NameHistory::new();
        assert!(history.is_empty());

        history.push(r1.clone());
        history.push(r2.clone());
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&r2));

        assert_eq!(history.pop(), Some(r2));
        assert_eq!(history.pop(), Some(r1));
        assert_eq!(history.pop(), None);
    }
}
