// crates/whitelist-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Whitelist Gate Identifiers
// Description: Canonical opaque identifiers for protected business operations.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the business key identifier used throughout the
//! Whitelist Gate. Business keys are opaque strings that namespace every
//! per-business configuration key; no normalization or validation is applied
//! at this layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Business key identifying a protected operation.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
/// - The raw value is embedded verbatim into derived configuration keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessKey(String);

impl BusinessKey {
    /// Creates a new business key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for BusinessKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for BusinessKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
