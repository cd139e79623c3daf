// crates/whitelist-gate-core/examples/minimal.rs
// ============================================================================
// Module: Whitelist Gate Minimal Example
// Description: Minimal end-to-end gate decision using an in-memory source.
// Purpose: Demonstrate decide and guard over a fixed configuration map.
// Dependencies: whitelist-gate-core
// ============================================================================

//! ## Overview
//! Wires a fixed in-memory configuration source into the gate, evaluates one
//! decision directly, and runs one operation through the guard adapter.

use std::collections::BTreeMap;

use whitelist_gate_core::BusinessKey;
use whitelist_gate_core::ConfigSource;
use whitelist_gate_core::GateDecision;
use whitelist_gate_core::WhitelistGate;
use whitelist_gate_core::guard;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Configuration source backed by a fixed map.
struct ExampleConfig {
    /// Stored configuration entries.
    entries: BTreeMap<String, String>,
}

impl ConfigSource for ExampleConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Builds the example configuration: gating on, order gated to two users.
fn build_config() -> ExampleConfig {
    let entries = [
        ("whitelist.switch", "true"),
        ("business.whitelist.switch.order", "true"),
        ("business.whitelist.value.order", "alice, bob"),
        ("business.whitelist.toast.order", "ordering is limited to pilot users"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();
    ExampleConfig {
        entries,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gate = WhitelistGate::new(build_config());
    let business_key = BusinessKey::new("order");

    let decision = gate.decide(&business_key, || Some("alice".to_string()))?;
    if !decision.is_proceed() {
        return Err(ExampleError("expected alice to pass the whitelist").into());
    }

    let denied = gate.decide(&business_key, || Some("mallory".to_string()))?;
    match denied {
        GateDecision::Deny {
            message,
        } => {
            if message != "ordering is limited to pilot users" {
                return Err(ExampleError("expected the configured toast").into());
            }
        }
        GateDecision::Proceed {
            ..
        } => return Err(ExampleError("expected mallory to be denied").into()),
    }

    let placed = guard(&gate, &business_key, || Some("bob".to_string()), || {
        Ok::<_, std::io::Error>("order placed")
    })?;
    let _ = placed;
    Ok(())
}
