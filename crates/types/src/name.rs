//! The opaque name key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered name.
///
/// Names are arbitrary byte strings with no required encoding; the
/// registry treats them as opaque keys. Ordering is lexicographic on
/// the raw bytes, which is what the expiration index and the trie
/// flush rely on.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Name(Vec<u8>);

impl Name {
    /// Create a name from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the name in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the name is empty.
    ///
    /// The empty name sorts before all others and is used as the lower
    /// bound for height-scoped range scans.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Name {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printable ASCII is shown as-is, anything else as hex.
        if !self.0.is_empty() && self.0.iter().all(|b| b.is_ascii_graphic()) {
            write!(f, "{}", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "0x{}", hex::encode(&self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_ordering() {
        let a = Name::from("a");
        let ab = Name::from("ab");
        let b = Name::from("b");
        assert!(a < ab);
        assert!(ab < b);
        assert!(Name::default() < a);
    }

    #[test]
    fn test_display_binary_falls_back_to_hex() {
        let printable = Name::from("d/example");
        assert_eq!(printable.to_string(), "d/example");

        let binary = Name::new(vec![0x00, 0xff]);
        assert_eq!(binary.to_string(), "0x00ff");
    }
}
