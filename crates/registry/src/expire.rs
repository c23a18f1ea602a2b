//! Expiration-index keys.

use namechain_types::{BlockHeight, Name};

/// Key of one expiration-index entry: the height at which a name
/// becomes expiration-eligible, plus the name itself.
///
/// Ordering is height first, then name bytes (the derived `Ord` follows
/// field order). The height-major ordering is load-bearing: it is what
/// lets [`crate::NameCache::update_names_for_height`] answer "which
/// markers toggle at height H" with a single bounded range scan instead
/// of a full-index walk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpireEntry {
    /// Height at which the marker applies.
    pub height: BlockHeight,

    /// The name the marker is for.
    pub name: Name,
}

impl ExpireEntry {
    /// Create an entry for a (height, name) pair.
    pub fn new(height: BlockHeight, name: Name) -> Self {
        Self { height, name }
    }

    /// The smallest possible entry at `height`.
    ///
    /// The empty name sorts before every real name, so this is the
    /// lower bound for a range scan over all entries at `height` and
    /// above.
    pub fn first_at(height: BlockHeight) -> Self {
        Self {
            height,
            name: Name::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_orders_before_name() {
        let low_z = ExpireEntry::new(BlockHeight(10), Name::from("z"));
        let high_a = ExpireEntry::new(BlockHeight(11), Name::from("a"));
        assert!(low_z < high_a);
    }

    #[test]
    fn test_name_breaks_height_ties() {
        let a = ExpireEntry::new(BlockHeight(10), Name::from("a"));
        let b = ExpireEntry::new(BlockHeight(10), Name::from("b"));
        assert!(a < b);
    }

    #[test]
    fn test_first_at_is_lower_bound() {
        let bound = ExpireEntry::first_at(BlockHeight(10));
        let entry = ExpireEntry::new(BlockHeight(10), Name::from("a"));
        let below = ExpireEntry::new(BlockHeight(9), Name::from("zzz"));
        assert!(bound <= entry);
        assert!(below < bound);
    }
}
