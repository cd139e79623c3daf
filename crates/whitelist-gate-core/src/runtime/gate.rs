// crates/whitelist-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Whitelist Gate Engine
// Description: Multi-level switch, window, and membership decision procedure.
// Purpose: Compute a single gating decision from injected configuration reads.
// Dependencies: crate::core, crate::interfaces, thiserror, time, tracing
// ============================================================================

//! ## Overview
//! The gate composes four checks with fixed precedence: global switch,
//! per-business switch, checking window, and whitelist membership. Each
//! disabled or inactive level short-circuits to a proceed decision; only a
//! failed membership check denies. Absent switch configuration means the
//! feature is not yet configured to restrict, so the gate passes through.
//! Malformed timestamp configuration is an operator error and aborts the
//! decision instead of defaulting.
//!
//! Every configuration key is re-read on every decision, so changes in the
//! backing source take effect on the next call without restart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::ParseIntError;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::core::BusinessKey;
use crate::core::CheckWindow;
use crate::core::GateDecision;
use crate::core::ProceedReason;
use crate::core::Timestamp;
use crate::core::Whitelist;
use crate::core::keys;
use crate::interfaces::Clock;
use crate::interfaces::ConfigSource;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Denial message used when no per-business toast is configured.
pub const DEFAULT_DENY_TOAST: &str = "access denied, not whitelisted";

/// Switch values are compared case-insensitively against this literal.
const SWITCH_ON: &str = "true";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Gate evaluation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Absent configuration is never an error; only malformed values are.
#[derive(Debug, Error)]
pub enum GateError {
    /// Timestamp configuration present but not parseable as epoch milliseconds.
    #[error("malformed timestamp configuration for {key}: {value:?}")]
    MalformedTimestamp {
        /// Configuration key holding the malformed value.
        key: String,
        /// The unparseable configured value.
        value: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

// ============================================================================
// SECTION: System Clock
// ============================================================================

/// Wall-clock [`Clock`] implementation over UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Timestamp::from_unix_millis(i64::try_from(millis).unwrap_or(i64::MAX))
    }
}

// ============================================================================
// SECTION: Whitelist Gate
// ============================================================================

/// Whitelist gate over an injected configuration source and clock.
///
/// # Invariants
/// - Stateless between decisions; every key is re-read per invocation.
/// - The check-value resolver runs only when a membership check is required.
#[derive(Debug, Clone)]
pub struct WhitelistGate<S, C = SystemClock> {
    /// Injected configuration source, read fresh on every decision.
    source: S,
    /// Injected time source for window evaluation.
    clock: C,
}

impl<S: ConfigSource> WhitelistGate<S> {
    /// Creates a gate over the source using the system clock.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            clock: SystemClock,
        }
    }
}

impl<S: ConfigSource, C: Clock> WhitelistGate<S, C> {
    /// Creates a gate over the source with an explicit clock.
    #[must_use]
    pub const fn with_clock(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
        }
    }

    /// Computes a gating decision at the injected clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when timestamp configuration is malformed.
    pub fn decide<R>(
        &self,
        business_key: &BusinessKey,
        resolve_check_value: R,
    ) -> Result<GateDecision, GateError>
    where
        R: FnOnce() -> Option<String>,
    {
        self.decide_at(business_key, self.clock.now(), resolve_check_value)
    }

    /// Computes a gating decision at an explicit time.
    ///
    /// Checks run in order: global switch, business switch, checking window,
    /// whitelist membership. Each disabled or inactive level short-circuits
    /// to a proceed decision. The resolver is invoked only when all prior
    /// levels require a membership check.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when timestamp configuration is malformed.
    pub fn decide_at<R>(
        &self,
        business_key: &BusinessKey,
        now: Timestamp,
        resolve_check_value: R,
    ) -> Result<GateDecision, GateError>
    where
        R: FnOnce() -> Option<String>,
    {
        if !self.switch_enabled(keys::GLOBAL_SWITCH_KEY) {
            return Ok(GateDecision::proceed(ProceedReason::GloballyDisabled));
        }

        if !self.switch_enabled(&keys::business_switch_key(business_key)) {
            info!(business_key = %business_key, "whitelist checking disabled for business");
            return Ok(GateDecision::proceed(ProceedReason::BusinessDisabled));
        }

        let window = self.load_window(business_key)?;
        if !window.is_active(now) {
            info!(business_key = %business_key, "outside whitelist checking window");
            return Ok(GateDecision::proceed(ProceedReason::OutsideWindow));
        }

        let check_value = resolve_check_value();
        info!(
            business_key = %business_key,
            check_value = check_value.as_deref().unwrap_or_default(),
            "whitelist checking enabled"
        );

        let whitelist = self.source.get(&keys::whitelist_value_key(business_key));
        let candidate = check_value.as_deref().map(str::trim).filter(|value| !value.is_empty());
        let matched = match (whitelist.as_deref(), candidate) {
            (Some(raw), Some(candidate)) => Whitelist::parse(raw).permits(candidate),
            _ => false,
        };

        if matched {
            info!(
                business_key = %business_key,
                check_value = candidate.unwrap_or_default(),
                "whitelist check passed"
            );
            return Ok(GateDecision::proceed(ProceedReason::WhitelistMatched));
        }

        info!(
            business_key = %business_key,
            check_value = check_value.as_deref().unwrap_or_default(),
            "whitelist check failed"
        );
        Ok(GateDecision::deny(self.deny_message(business_key)))
    }

    /// Returns true when the switch key is configured case-insensitively "true".
    fn switch_enabled(&self, key: &str) -> bool {
        self.source.get(key).is_some_and(|value| value.eq_ignore_ascii_case(SWITCH_ON))
    }

    /// Loads the checking window for the business key.
    ///
    /// Either bound may be absent. A configured bound that does not parse as
    /// epoch milliseconds is a fatal configuration error for this decision.
    fn load_window(&self, business_key: &BusinessKey) -> Result<CheckWindow, GateError> {
        let begin_at = self.load_bound(&keys::begin_at_key(business_key))?;
        let end_at = self.load_bound(&keys::end_at_key(business_key))?;
        Ok(CheckWindow {
            begin_at,
            end_at,
        })
    }

    /// Loads one optional window bound from configuration.
    fn load_bound(&self, key: &str) -> Result<Option<Timestamp>, GateError> {
        let Some(value) = self.source.get(key) else {
            return Ok(None);
        };
        let millis = value.parse::<i64>().map_err(|source| GateError::MalformedTimestamp {
            key: key.to_string(),
            value,
            source,
        })?;
        Ok(Some(Timestamp::from_unix_millis(millis)))
    }

    /// Returns the configured toast for the business key, or the default.
    fn deny_message(&self, business_key: &BusinessKey) -> String {
        self.source
            .get(&keys::toast_key(business_key))
            .unwrap_or_else(|| DEFAULT_DENY_TOAST.to_string())
    }
}
