//! Compute intent - cluster, network mode and task template

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming;
use crate::profile::{EnvironmentProfile, LifecyclePolicy};
use crate::resource::registry::RegistryIntent;

/// Zone spread for isolated networks, for fault tolerance inside the
/// environment the plan does control.
pub const DEFAULT_AVAILABILITY_ZONES: u8 = 2;

/// The mutable tag requested when no pin is configured
pub const MUTABLE_TAG: &str = "latest";

/// How the cluster attaches to a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NetworkMode {
    /// A fresh isolated network, provisioned with the cluster
    NewIsolatedNetwork { availability_zones: u8 },
    /// A lookup of the default network in an account the plan does not
    /// control; never synthesized
    ExistingDefaultNetwork,
}

/// A container image, referenced by registry URI and tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub registry_uri: String,
    pub tag: String,
}

/// A cluster plus task-template pair
///
/// References its registry by URI only - the registry may outlive the
/// cluster and be shared by other compute intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeIntent {
    pub cluster_name: String,
    pub task_family: String,
    pub network: NetworkMode,
    pub task_memory_mib: i64,
    pub task_cpu_units: i64,
    pub image: ImageReference,
    pub lifecycle: LifecyclePolicy,
}

impl ComputeIntent {
    /// Resolve the compute pair for a profile.
    ///
    /// Privileged environments look up their account's default network;
    /// everything else gets a fresh isolated one. Sizing comes straight
    /// from the profile and must be positive.
    pub fn resolve(
        profile: &EnvironmentProfile,
        registry: &RegistryIntent,
    ) -> Result<Self, ConfigError> {
        profile.sizing.validate(&profile.name)?;

        let network = if profile.is_privileged() {
            NetworkMode::ExistingDefaultNetwork
        } else {
            NetworkMode::NewIsolatedNetwork {
                availability_zones: DEFAULT_AVAILABILITY_ZONES,
            }
        };

        let tag = profile.image_tag.clone().unwrap_or_else(|| {
            log::warn!(
                "environment '{}' has no image tag pin; requesting mutable '{MUTABLE_TAG}' (deploys will not be reproducible)",
                profile.name
            );
            MUTABLE_TAG.to_string()
        });

        Ok(Self {
            cluster_name: naming::cluster_name(&profile.name),
            task_family: naming::task_family(&profile.name),
            network,
            task_memory_mib: profile.sizing.memory_mib,
            task_cpu_units: profile.sizing.cpu_units,
            image: ImageReference {
                registry_uri: registry.uri(profile),
                tag,
            },
            lifecycle: profile.lifecycle,
        })
    }
}
