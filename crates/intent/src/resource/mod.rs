//! Resource intent kinds
//!
//! One module per kind, each owning its own resolution policy. Intents
//! are declarative descriptions of desired resources, not applied state;
//! the plan compiler assembles them in dependency order.

pub mod compute;
pub mod registry;
pub mod schedule;
pub mod storage;

pub use compute::{ComputeIntent, ImageReference, NetworkMode};
pub use registry::RegistryIntent;
pub use schedule::ScheduleIntent;
pub use storage::StorageIntent;

use serde::{Deserialize, Serialize};

/// A resolved intent of any kind, kept as a closed sum so plans can be
/// serialized deterministically (trait objects would not serialize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resource")]
pub enum Intent {
    Storage(StorageIntent),
    Registry(RegistryIntent),
    Compute(ComputeIntent),
    Schedule(ScheduleIntent),
}

impl Intent {
    /// Stable identifier within the plan, unique per (environment, kind)
    pub fn id(&self) -> &str {
        match self {
            Self::Storage(s) => s.name(),
            Self::Registry(r) => &r.name,
            Self::Compute(c) => &c.cluster_name,
            Self::Schedule(s) => &s.name,
        }
    }

    /// Resource kind category, used for grouping and parameter paths
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage",
            Self::Registry(_) => "registry",
            Self::Compute(_) => "compute",
            Self::Schedule(_) => "schedule",
        }
    }

    /// Human-readable description of what this intent requests
    pub fn description(&self) -> String {
        match self {
            Self::Storage(StorageIntent::CreateNew { name, lifecycle }) => {
                format!("create bucket '{name}' ({lifecycle})")
            }
            Self::Storage(StorageIntent::ReferenceExisting { name }) => {
                format!("reference existing bucket '{name}'")
            }
            Self::Registry(r) => {
                format!("create registry '{}' ({} grants)", r.name, r.grants.len())
            }
            Self::Compute(c) => format!(
                "create cluster '{}' ({} MiB / {} cpu)",
                c.cluster_name, c.task_memory_mib, c.task_cpu_units
            ),
            Self::Schedule(s) => {
                format!("schedule '{}' firing '{}'", s.cron, s.target_task_family)
            }
        }
    }

    /// Whether this intent provisions a new resource (as opposed to
    /// referencing one that already exists)
    pub fn is_create(&self) -> bool {
        match self {
            Self::Storage(s) => s.is_create(),
            Self::Registry(_) | Self::Compute(_) | Self::Schedule(_) => true,
        }
    }
}
