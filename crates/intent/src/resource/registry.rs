//! Container-registry intent

use serde::{Deserialize, Serialize};

use crate::grants::{self, GrantStatement};
use crate::naming;
use crate::profile::{EnvironmentProfile, LifecyclePolicy};

/// A container-image registry, always created and owned by the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIntent {
    pub name: String,
    pub lifecycle: LifecyclePolicy,
    /// Cross-environment pull grants; empty for non-privileged environments
    pub grants: Vec<GrantStatement>,
}

impl RegistryIntent {
    /// Resolve the registry for a profile, attaching pull grants only when
    /// the environment is privileged/downstream.
    pub fn resolve(profile: &EnvironmentProfile) -> Self {
        Self {
            name: naming::registry_name(&profile.name),
            lifecycle: profile.lifecycle,
            grants: grants::pull_grants(profile),
        }
    }

    /// Fully qualified URI image references use for this registry
    pub fn uri(&self, profile: &EnvironmentProfile) -> String {
        naming::registry_uri(&profile.account, &profile.region, &self.name)
    }
}
