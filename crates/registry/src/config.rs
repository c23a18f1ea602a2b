//! Configuration for the registry cache.

/// Configuration for a [`crate::NameCache`].
///
/// History tracking is decided once, at cache construction; layers that
/// are merged into each other must agree on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryConfig {
    /// Whether per-name history is maintained.
    ///
    /// When disabled, all history operations are contract violations
    /// and panic. Full nodes typically run with this off; indexers and
    /// explorers turn it on.
    pub track_history: bool,
}

impl RegistryConfig {
    /// Create a config with history tracking enabled.
    pub fn with_history() -> Self {
        Self {
            track_history: true,
        }
    }
}
