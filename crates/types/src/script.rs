//! Decoded name operations.
//!
//! A [`NameScript`] is the output of the transaction script decoder: an
//! already-validated name operation recovered from a transaction output.
//! The registry trusts the decoder completely and performs no further
//! validation on these values.

use crate::{Address, Hash, Name};
use serde::{Deserialize, Serialize};

/// The kind of name operation carried by a transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameOp {
    /// First-registration intent. Commits to a future name without
    /// revealing it; carries no resolvable value.
    Intent {
        /// Salted commitment to the name being registered.
        commitment: Hash,
    },

    /// Reveal and first update of a previously committed name.
    FirstUpdate {
        /// The name being registered.
        name: Name,
        /// Initial value associated with the name.
        value: Vec<u8>,
    },

    /// Update or renewal of an existing name.
    Update {
        /// The name being updated.
        name: Name,
        /// New value associated with the name.
        value: Vec<u8>,
    },
}

/// A decoded name operation together with the owning address recovered
/// from the same transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameScript {
    op: NameOp,
    address: Address,
}

impl NameScript {
    /// Create a decoded name script.
    pub fn new(op: NameOp, address: Address) -> Self {
        Self { op, address }
    }

    /// The operation carried by this script.
    pub fn op(&self) -> &NameOp {
        &self.op
    }

    /// Whether this is an update-class operation (first update or
    /// update/renewal). Intents are not updates: they carry no
    /// resolvable value yet.
    pub fn is_any_update(&self) -> bool {
        matches!(
            self.op,
            NameOp::FirstUpdate { .. } | NameOp::Update { .. }
        )
    }

    /// The name this operation applies to.
    ///
    /// # Panics
    ///
    /// Panics for [`NameOp::Intent`], which only carries a commitment.
    pub fn name(&self) -> &Name {
        match &self.op {
            NameOp::FirstUpdate { name, .. } | NameOp::Update { name, .. } => name,
            NameOp::Intent { .. } => panic!("intent operation carries no name"),
        }
    }

    /// The value carried by an update-class operation.
    ///
    /// # Panics
    ///
    /// Panics for [`NameOp::Intent`], which carries no value.
    pub fn op_value(&self) -> &[u8] {
        match &self.op {
            NameOp::FirstUpdate { value, .. } | NameOp::Update { value, .. } => value,
            NameOp::Intent { .. } => panic!("intent operation carries no value"),
        }
    }

    /// The owning address recovered from the transaction output.
    pub fn address(&self) -> &Address {
        &self.address
    }
}
