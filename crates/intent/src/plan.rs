//! Plans - ordered, resolved, ready for an external provisioner
//!
//! A plan is a sequence, not a set: consumers apply intents in order, and
//! the order encodes dependencies (storage and registry before compute,
//! compute before schedule). Emission is pure; all validation happened
//! upstream during resolution.

use serde::{Deserialize, Serialize};

use crate::profile::EnvName;
use crate::resource::Intent;

/// A named output published for downstream consumption
/// (parameter-store style hierarchical key, resolved value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    pub path: String,
    pub value: String,
}

/// The same resolved data as the bindings, keyed for operator consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub value: String,
}

/// An ordered collection of resolved intents plus published outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub environment: EnvName,
    /// Dependency-ordered: emit order is apply order
    pub intents: Vec<Intent>,
    pub bindings: Vec<ParameterBinding>,
    pub outputs: Vec<Output>,
}

impl Plan {
    /// Serialize to pretty JSON. Struct field order is fixed, so identical
    /// input yields byte-identical output.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Number of intents that provision new resources
    pub fn created_count(&self) -> usize {
        self.intents.iter().filter(|i| i.is_create()).count()
    }

    /// Every identifier and parameter path must be unique within a plan.
    /// Violations are programmer errors in the naming module, so this is
    /// a debug check rather than a runtime error path.
    pub(crate) fn debug_check_unique(&self) {
        let mut ids: Vec<&str> = self.intents.iter().map(Intent::id).collect();
        ids.sort_unstable();
        debug_assert!(
            ids.windows(2).all(|w| w[0] != w[1]),
            "duplicate intent identifier in plan"
        );

        let mut paths: Vec<&str> = self.bindings.iter().map(|b| b.path.as_str()).collect();
        paths.sort_unstable();
        debug_assert!(
            paths.windows(2).all(|w| w[0] != w[1]),
            "duplicate parameter path in plan"
        );
    }
}
