// crates/whitelist-gate-core/src/runtime/guard.rs
// ============================================================================
// Module: Guarded Operation Adapter
// Description: Decorator applying a gate decision around a protected operation.
// Purpose: Replace framework call interception with an explicit wrapper.
// Dependencies: crate::core, crate::interfaces, crate::runtime::gate, thiserror
// ============================================================================

//! ## Overview
//! The guard is the thin, replaceable interception adapter around the gate:
//! the caller supplies the business key, a lazy check-value resolver, and the
//! protected operation as a closure. The operation runs only on a proceed
//! decision. Denial is a deliberate application-level control-flow signal
//! and stays distinguishable from configuration errors and from the wrapped
//! operation's own failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::BusinessKey;
use crate::core::GateDecision;
use crate::interfaces::Clock;
use crate::interfaces::ConfigSource;
use crate::runtime::gate::GateError;
use crate::runtime::gate::WhitelistGate;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Guarded operation errors.
///
/// # Invariants
/// - `Denied` is control flow, not a fault; callers must branch on it.
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum GuardError<E>
where
    E: std::error::Error + 'static,
{
    /// The gate denied access; the operation was not run.
    #[error("whitelist access denied: {message}")]
    Denied {
        /// User-facing denial message (configured toast or default).
        message: String,
    },
    /// Gate configuration is malformed; the operation was not run.
    #[error("whitelist gate configuration error")]
    Config(#[from] GateError),
    /// The protected operation itself failed after a proceed decision.
    #[error("protected operation failed")]
    Operation(#[source] E),
}

// ============================================================================
// SECTION: Guarded Invocation
// ============================================================================

/// Runs the protected operation when the gate decides to proceed.
///
/// The resolver is invoked only if the gate requires a membership check; the
/// operation is invoked only on a proceed decision.
///
/// # Errors
///
/// Returns [`GuardError::Denied`] on a deny decision, [`GuardError::Config`]
/// when gate configuration is malformed, and [`GuardError::Operation`] when
/// the operation itself fails.
pub fn guard<S, C, R, Op, T, E>(
    gate: &WhitelistGate<S, C>,
    business_key: &BusinessKey,
    resolve_check_value: R,
    operation: Op,
) -> Result<T, GuardError<E>>
where
    S: ConfigSource,
    C: Clock,
    R: FnOnce() -> Option<String>,
    Op: FnOnce() -> Result<T, E>,
    E: std::error::Error + 'static,
{
    match gate.decide(business_key, resolve_check_value)? {
        GateDecision::Proceed {
            ..
        } => operation().map_err(GuardError::Operation),
        GateDecision::Deny {
            message,
        } => Err(GuardError::Denied {
            message,
        }),
    }
}
