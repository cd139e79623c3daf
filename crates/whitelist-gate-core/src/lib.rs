// crates/whitelist-gate-core/src/lib.rs
// ============================================================================
// Module: Whitelist Gate Core
// Description: Feature-gate decision engine over externally-stored configuration.
// Purpose: Decide whether a caller's check value may proceed, per business key.
// Dependencies: serde, thiserror, time, tracing
// ============================================================================

//! ## Overview
//! This crate implements the whitelist gate: a method-level guard that,
//! based on externally-stored configuration, decides whether a caller's
//! attribute value is permitted to proceed, is outside an active checking
//! window, or is unrestricted. The decision procedure composes a global
//! switch, a per-business switch, an optional checking window, and a
//! whitelist-membership check with fixed precedence and permissive fallback
//! for absent configuration.
//! Invariants:
//! - Membership runs only when both switches are on and the window is active.
//! - Whitelist comparison is exact match on trimmed tokens; blanks ignored.
//! - Absent switch configuration reads as "false" (pass-through).
//! - Every configuration key is re-read per decision; nothing is cached.
//!
//! Configuration storage, call interception, and check-value expression
//! evaluation stay outside this crate behind the [`interfaces`] traits and
//! the [`runtime::guard`] adapter.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::BusinessKey;
pub use self::core::CheckWindow;
pub use self::core::GateDecision;
pub use self::core::ProceedReason;
pub use self::core::Timestamp;
pub use self::core::Whitelist;
pub use self::core::keys;
pub use interfaces::Clock;
pub use interfaces::ConfigSource;
pub use runtime::DEFAULT_DENY_TOAST;
pub use runtime::GateError;
pub use runtime::GuardError;
pub use runtime::SystemClock;
pub use runtime::WhitelistGate;
pub use runtime::guard;
