// crates/whitelist-gate-core/src/core/whitelist.rs
// ============================================================================
// Module: Whitelist Membership
// Description: Parsing and membership checks for configured whitelists.
// Purpose: Evaluate check values against comma-separated whitelist tokens.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A whitelist is re-derived from the latest configuration value on every
//! decision; no parsed structure is persisted. Tokens are trimmed, blank
//! tokens are dropped, and membership is exact match on the trimmed
//! candidate. An empty whitelist permits nothing.

// ============================================================================
// SECTION: Whitelist
// ============================================================================

/// Set of allowed values for a business key.
///
/// # Invariants
/// - Tokens are trimmed and non-blank.
/// - Token order is preserved but irrelevant to membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    /// Trimmed, non-blank tokens in configuration order.
    tokens: Vec<String>,
}

/// Separator between whitelist tokens in the configuration value.
const TOKEN_SEPARATOR: char = ',';

impl Whitelist {
    /// Parses a whitelist from its comma-separated configuration value.
    ///
    /// Tokens are trimmed; blank tokens are ignored. Parsing never fails:
    /// unusable input yields an empty whitelist, which permits nothing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(TOKEN_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            tokens,
        }
    }

    /// Returns true when the trimmed candidate matches a whitelist token.
    #[must_use]
    pub fn permits(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.tokens.iter().any(|token| token == candidate)
    }

    /// Returns true when the whitelist holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of whitelist tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
