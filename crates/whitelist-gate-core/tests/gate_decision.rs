// crates/whitelist-gate-core/tests/gate_decision.rs
// ============================================================================
// Module: Gate Decision Tests
// Description: Validate switch precedence and membership outcomes.
// Purpose: Ensure each gate level short-circuits deterministically.
// Dependencies: whitelist-gate-core
// ============================================================================

//! Decision precedence tests for the whitelist gate.

use std::cell::Cell;
use std::collections::BTreeMap;

use whitelist_gate_core::BusinessKey;
use whitelist_gate_core::ConfigSource;
use whitelist_gate_core::DEFAULT_DENY_TOAST;
use whitelist_gate_core::GateDecision;
use whitelist_gate_core::ProceedReason;
use whitelist_gate_core::Timestamp;
use whitelist_gate_core::WhitelistGate;

/// Configuration source backed by a fixed set of entries.
struct FixedConfig {
    /// Stored configuration entries.
    entries: BTreeMap<String, String>,
}

impl FixedConfig {
    /// Builds a source from literal key/value pairs.
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

impl ConfigSource for FixedConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Arbitrary evaluation instant for tests without window configuration.
const NOW: Timestamp = Timestamp::from_unix_millis(1_000);

#[test]
fn global_switch_unset_proceeds_without_resolving() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice"),
    ]));
    let resolved = Cell::new(false);

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || {
        resolved.set(true);
        Some("mallory".to_string())
    })?;

    if decision != GateDecision::proceed(ProceedReason::GloballyDisabled) {
        return Err(format!("unexpected decision: {decision:?}").into());
    }
    if resolved.get() {
        return Err("resolver must not run while the feature is globally off".into());
    }
    Ok(())
}

#[test]
fn global_switch_false_proceeds() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "false"),
        ("business.whitelist.switch.order", "true"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || None)?;
    if decision != GateDecision::proceed(ProceedReason::GloballyDisabled) {
        return Err(format!("unexpected decision: {decision:?}").into());
    }
    Ok(())
}

#[test]
fn global_switch_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "TRUE"),
        ("business.whitelist.switch.order", "True"),
        ("business.whitelist.value.order", "alice"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("alice".to_string()))?;
    if decision != GateDecision::proceed(ProceedReason::WhitelistMatched) {
        return Err(format!("unexpected decision: {decision:?}").into());
    }
    Ok(())
}

#[test]
fn business_switch_unset_proceeds_without_resolving() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.value.order", "alice"),
    ]));
    let resolved = Cell::new(false);

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || {
        resolved.set(true);
        Some("alice".to_string())
    })?;

    if decision != GateDecision::proceed(ProceedReason::BusinessDisabled) {
        return Err(format!("unexpected decision: {decision:?}").into());
    }
    if resolved.get() {
        return Err("resolver must not run while the business switch is off".into());
    }
    Ok(())
}

#[test]
fn business_switches_are_scoped_per_key() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice"),
    ]));

    let gated = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("bob".to_string()))?;
    if !gated.is_deny() {
        return Err(format!("expected denial for gated business, got {gated:?}").into());
    }

    let ungated = gate.decide_at(&BusinessKey::new("refund"), NOW, || Some("bob".to_string()))?;
    if ungated != GateDecision::proceed(ProceedReason::BusinessDisabled) {
        return Err(format!("unexpected decision for ungated business: {ungated:?}").into());
    }
    Ok(())
}

#[test]
fn matched_check_value_proceeds() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice,bob"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("bob".to_string()))?;
    if decision != GateDecision::proceed(ProceedReason::WhitelistMatched) {
        return Err(format!("unexpected decision: {decision:?}").into());
    }
    Ok(())
}

#[test]
fn unmatched_check_value_denies_with_default_toast() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice,bob"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("mallory".to_string()))?;
    match decision {
        GateDecision::Deny {
            message,
        } => {
            if message != DEFAULT_DENY_TOAST {
                return Err(format!("unexpected toast: {message}").into());
            }
        }
        GateDecision::Proceed {
            ..
        } => return Err("expected denial for unmatched check value".into()),
    }
    Ok(())
}

#[test]
fn configured_toast_overrides_default() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice"),
        ("business.whitelist.toast.order", "pilot users only"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("mallory".to_string()))?;
    match decision {
        GateDecision::Deny {
            message,
        } => {
            if message != "pilot users only" {
                return Err(format!("unexpected toast: {message}").into());
            }
        }
        GateDecision::Proceed {
            ..
        } => return Err("expected denial for unmatched check value".into()),
    }
    Ok(())
}

#[test]
fn absent_whitelist_denies_any_check_value() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
    ]));

    let decision = gate.decide_at(&BusinessKey::new("order"), NOW, || Some("alice".to_string()))?;
    if !decision.is_deny() {
        return Err(format!("expected denial without a configured whitelist: {decision:?}").into());
    }
    Ok(())
}

#[test]
fn absent_or_blank_check_value_denies() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice"),
    ]));
    let business_key = BusinessKey::new("order");

    let absent = gate.decide_at(&business_key, NOW, || None)?;
    if !absent.is_deny() {
        return Err(format!("expected denial for absent check value: {absent:?}").into());
    }

    let blank = gate.decide_at(&business_key, NOW, || Some("   ".to_string()))?;
    if !blank.is_deny() {
        return Err(format!("expected denial for blank check value: {blank:?}").into());
    }
    Ok(())
}

#[test]
fn repeated_decisions_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(FixedConfig::new(&[
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice"),
    ]));
    let business_key = BusinessKey::new("order");

    let first = gate.decide_at(&business_key, NOW, || Some("alice".to_string()))?;
    let second = gate.decide_at(&business_key, NOW, || Some("alice".to_string()))?;
    if first != second {
        return Err(format!("decisions diverged: {first:?} vs {second:?}").into());
    }
    Ok(())
}
