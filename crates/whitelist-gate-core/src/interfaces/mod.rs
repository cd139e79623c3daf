// crates/whitelist-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Whitelist Gate Interfaces
// Description: Backend-agnostic interfaces for configuration and time access.
// Purpose: Define the contract surfaces injected into the whitelist gate.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the gate reaches external systems without embedding
//! backend-specific details. Configuration sources may be backed by local
//! properties, the process environment, or a remote dynamic-config client;
//! the gate only requires a fresh optional-string read per key. Absent
//! configuration is a normal outcome, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::Timestamp;

// ============================================================================
// SECTION: Configuration Source
// ============================================================================

/// Backend-agnostic configuration source.
///
/// Implementations must be safe for concurrent reads and must reflect the
/// latest stored value on every call; the gate performs a fresh read per
/// decision so live configuration changes take effect without restart.
pub trait ConfigSource {
    /// Returns the configured value for the key, or `None` when not configured.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Time source for checking-window evaluation.
///
/// The gate reads time only through this seam so decisions stay
/// deterministic under test and replay.
pub trait Clock {
    /// Returns the current time as an epoch-millisecond timestamp.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
