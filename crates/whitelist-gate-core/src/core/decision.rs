// crates/whitelist-gate-core/src/core/decision.rs
// ============================================================================
// Module: Gate Decisions
// Description: Decision outcomes produced by the whitelist gate.
// Purpose: Capture proceed/deny outcomes with stable wire forms for audit.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every gate invocation resolves to a decision: proceed (with the reason the
//! check passed through or matched) or deny (with the user-facing message).
//! Decisions are computed fresh per invocation and carry no references to
//! configuration state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Proceed Reasons
// ============================================================================

/// Reason a decision resolved to proceed.
///
/// # Invariants
/// - Variants are stable for serialization and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProceedReason {
    /// The global whitelist switch is off or unset.
    GloballyDisabled,
    /// The per-business switch is off or unset.
    BusinessDisabled,
    /// The current time is outside the configured checking window.
    OutsideWindow,
    /// The check value matched a whitelist token.
    WhitelistMatched,
}

// ============================================================================
// SECTION: Gate Decision
// ============================================================================

/// Outcome of a single gate invocation.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - `Deny` always carries a non-empty user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateDecision {
    /// The caller may run the protected operation.
    Proceed {
        /// Why the gate let the call through.
        reason: ProceedReason,
    },
    /// The caller must not run the protected operation.
    Deny {
        /// User-facing denial message (configured toast or default).
        message: String,
    },
}

impl GateDecision {
    /// Creates a proceed decision with the given reason.
    #[must_use]
    pub const fn proceed(reason: ProceedReason) -> Self {
        Self::Proceed {
            reason,
        }
    }

    /// Creates a deny decision with the given message.
    #[must_use]
    pub fn deny(message: impl Into<String>) -> Self {
        Self::Deny {
            message: message.into(),
        }
    }

    /// Returns true when the decision permits the protected operation.
    #[must_use]
    pub const fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed { .. })
    }

    /// Returns true when the decision rejects the protected operation.
    #[must_use]
    pub const fn is_deny(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }
}
