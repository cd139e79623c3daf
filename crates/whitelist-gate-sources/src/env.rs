// crates/whitelist-gate-sources/src/env.rs
// ============================================================================
// Module: Environment Configuration Source
// Description: Configuration source over process environment variables.
// Purpose: Expose deterministic access to environment-backed gate settings.
// Dependencies: whitelist-gate-core, serde
// ============================================================================

//! ## Overview
//! The environment source maps configuration keys onto environment variable
//! names: characters outside `[A-Za-z0-9]` become `_` and the result is
//! uppercased, so `business.whitelist.switch.order` reads
//! `BUSINESS_WHITELIST_SWITCH_ORDER`. An optional name prefix scopes the
//! variables to one deployment. Overrides take precedence over process
//! environment reads and keep tests deterministic. Values over the size cap
//! are treated as not configured.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use whitelist_gate_core::ConfigSource;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the environment source.
///
/// # Invariants
/// - `overrides` take precedence over process environment reads.
/// - `max_value_bytes` is enforced as a hard upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvSourceConfig {
    /// Optional prefix prepended to every mapped variable name.
    pub prefix: Option<String>,
    /// Optional override map used for deterministic lookups.
    pub overrides: Option<BTreeMap<String, String>>,
    /// Maximum bytes allowed for a single environment value.
    pub max_value_bytes: usize,
}

impl Default for EnvSourceConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            overrides: None,
            max_value_bytes: 64 * 1024,
        }
    }
}

// ============================================================================
// SECTION: Environment Source
// ============================================================================

/// Configuration source over process environment variables.
///
/// # Invariants
/// - Key mapping is stable: non-alphanumerics become `_`, letters uppercase.
/// - Overrides are keyed by the configuration key, not the mapped name.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    /// Source configuration, including prefix and overrides.
    config: EnvSourceConfig,
}

impl EnvSource {
    /// Creates a new environment source with the given configuration.
    #[must_use]
    pub const fn new(config: EnvSourceConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the environment variable name for a configuration key.
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        let mapped: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() {
                    ch.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        match self.config.prefix.as_deref() {
            Some(prefix) => format!("{prefix}{mapped}"),
            None => mapped,
        }
    }

    /// Applies the value size cap, dropping oversized values.
    fn capped(&self, value: String) -> Option<String> {
        (value.len() <= self.config.max_value_bytes).then_some(value)
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(overrides) = &self.config.overrides {
            return overrides.get(key).cloned().and_then(|value| self.capped(value));
        }
        std::env::var(self.variable_name(key)).ok().and_then(|value| self.capped(value))
    }
}
