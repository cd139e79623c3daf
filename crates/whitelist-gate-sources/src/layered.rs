// crates/whitelist-gate-sources/src/layered.rs
// ============================================================================
// Module: Layered Configuration Source
// Description: Ordered first-hit chain over multiple configuration sources.
// Purpose: Let local overrides shadow remote-backed configuration.
// Dependencies: whitelist-gate-core
// ============================================================================

//! ## Overview
//! The layered source consults its layers in registration order and returns
//! the first configured value. Layers further back act as fallbacks; a layer
//! returning `None` defers to the next one. Typical layout: a mutable local
//! layer in front of an environment- or remote-backed layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use whitelist_gate_core::ConfigSource;

// ============================================================================
// SECTION: Layered Source
// ============================================================================

/// Ordered chain of configuration sources.
///
/// # Invariants
/// - Layers are consulted in registration order; the first value wins.
#[derive(Default)]
pub struct LayeredSource {
    /// Registered layers, front to back.
    layers: Vec<Box<dyn ConfigSource + Send + Sync>>,
}

impl LayeredSource {
    /// Creates an empty layered source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer behind any already-registered layers.
    #[must_use]
    pub fn with_layer<S>(mut self, layer: S) -> Self
    where
        S: ConfigSource + Send + Sync + 'static,
    {
        self.layers.push(Box::new(layer));
        self
    }

    /// Returns the number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true when no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for LayeredSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredSource").field("layers", &self.layers.len()).finish()
    }
}

impl ConfigSource for LayeredSource {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}
