// crates/whitelist-gate-core/src/core/time.rs
// ============================================================================
// Module: Whitelist Gate Time Model
// Description: Epoch-millisecond timestamps and checking windows.
// Purpose: Provide deterministic time values for window evaluation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The gate evaluates checking windows against explicit time values. The core
//! engine never reads wall-clock time directly; hosts supply timestamps or
//! inject a [`Clock`](crate::interfaces::Clock) implementation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Timestamps
// ============================================================================

/// Canonical epoch-millisecond timestamp used in window evaluation.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }
}

// ============================================================================
// SECTION: Checking Windows
// ============================================================================

/// Optional time range during which whitelist checking is active.
///
/// # Invariants
/// - `begin_at` and `end_at` are independently optional.
/// - The range is half-open: `begin_at` is inside, `end_at` is outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckWindow {
    /// Inclusive window start, when configured.
    pub begin_at: Option<Timestamp>,
    /// Exclusive window end, when configured.
    pub end_at: Option<Timestamp>,
}

impl CheckWindow {
    /// Creates a window with no bounds (checking always active).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            begin_at: None,
            end_at: None,
        }
    }

    /// Returns true when whitelist checking is active at `now`.
    ///
    /// An unbounded window is always active. With both bounds configured the
    /// window is active iff `begin_at <= now < end_at`; a single bound is
    /// evaluated on its own.
    #[must_use]
    pub fn is_active(&self, now: Timestamp) -> bool {
        match (self.begin_at, self.end_at) {
            (None, None) => true,
            (Some(begin_at), Some(end_at)) => begin_at <= now && now < end_at,
            (Some(begin_at), None) => begin_at <= now,
            (None, Some(end_at)) => now < end_at,
        }
    }
}
