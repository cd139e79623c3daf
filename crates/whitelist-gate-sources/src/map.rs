// crates/whitelist-gate-sources/src/map.rs
// ============================================================================
// Module: In-Memory Configuration Source
// Description: Shared mutable key-value source for tests and embedded hosts.
// Purpose: Support live reconfiguration visible to the next gate decision.
// Dependencies: whitelist-gate-core
// ============================================================================

//! ## Overview
//! The map source holds configuration in a shared, lock-guarded map. Clones
//! share storage, so a host can hand one handle to the gate and keep another
//! for updates; `set` and `remove` take effect on the next decision without
//! restarting anything.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::RwLock;

use whitelist_gate_core::ConfigSource;

// ============================================================================
// SECTION: Map Source
// ============================================================================

/// Shared in-memory configuration source.
///
/// # Invariants
/// - Clones share the same underlying storage.
/// - Reads observe the latest completed write.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    /// Shared configuration entries.
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MapSource {
    /// Creates an empty map source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a configuration value, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key.into(), value.into());
        }
    }

    /// Removes a configuration value, if present.
    pub fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.entries.write() {
            guard.remove(key);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok().and_then(|guard| guard.get(key).cloned())
    }
}
