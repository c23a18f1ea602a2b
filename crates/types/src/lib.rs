//! Core types for the namechain name registry.
//!
//! This crate provides the leaf value types shared across the node:
//! the opaque [`Name`] key, the [`NameRecord`] snapshot of a name's
//! current state, the [`NameHistory`] log of past states, and the
//! identifiers ([`BlockHeight`], [`Txid`], [`OutPoint`], [`Address`])
//! they are built from.
//!
//! All types here are plain data: no I/O, no interior mutability, and
//! deterministic hashing via [`Hash`].

mod hash;
mod identifiers;
mod name;
mod record;
mod script;

pub use hash::{Hash, HexError};
pub use identifiers::{Address, BlockHeight, OutPoint, Txid};
pub use name::Name;
pub use record::{NameHistory, NameRecord};
pub use script::{NameOp, NameScript};
