// crates/whitelist-gate-core/src/core/keys.rs
// ============================================================================
// Module: Configuration Key Construction
// Description: Canonical configuration keys consumed by the whitelist gate.
// Purpose: Centralize key prefixes so every lookup derives from one place.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! Canonical configuration keys consumed by the gate. The global switch key
//! is fixed; every other key is derived by joining a stable prefix with the
//! business key.
//! Invariants:
//! - Key prefixes are stable for external configuration compatibility.
//! - Derived keys embed the business key verbatim, without escaping.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::BusinessKey;

// ============================================================================
// SECTION: Key Constants
// ============================================================================

/// Global whitelist on/off switch key.
pub const GLOBAL_SWITCH_KEY: &str = "whitelist.switch";

/// Prefix for per-business on/off switch keys.
pub const BUSINESS_SWITCH_PREFIX: &str = "business.whitelist.switch.";

/// Prefix for per-business whitelist value keys.
pub const WHITELIST_VALUE_PREFIX: &str = "business.whitelist.value.";

/// Prefix for per-business checking-window start keys.
pub const BEGIN_AT_PREFIX: &str = "business.whitelist.beginAt.";

/// Prefix for per-business checking-window end keys.
pub const END_AT_PREFIX: &str = "business.whitelist.endAt.";

/// Prefix for per-business denial message keys.
pub const TOAST_PREFIX: &str = "business.whitelist.toast.";

// ============================================================================
// SECTION: Key Construction
// ============================================================================

/// Returns the per-business switch key for the business key.
#[must_use]
pub fn business_switch_key(business_key: &BusinessKey) -> String {
    format!("{BUSINESS_SWITCH_PREFIX}{business_key}")
}

/// Returns the whitelist value key for the business key.
#[must_use]
pub fn whitelist_value_key(business_key: &BusinessKey) -> String {
    format!("{WHITELIST_VALUE_PREFIX}{business_key}")
}

/// Returns the checking-window start key for the business key.
#[must_use]
pub fn begin_at_key(business_key: &BusinessKey) -> String {
    format!("{BEGIN_AT_PREFIX}{business_key}")
}

/// Returns the checking-window end key for the business key.
#[must_use]
pub fn end_at_key(business_key: &BusinessKey) -> String {
    format!("{END_AT_PREFIX}{business_key}")
}

/// Returns the denial message key for the business key.
#[must_use]
pub fn toast_key(business_key: &BusinessKey) -> String {
    format!("{TOAST_PREFIX}{business_key}")
}
