//! Object-storage intent - create-vs-reference as a sum type
//!
//! The create/lookup decision is a tagged variant resolved in exactly one
//! place, never an if/else scattered across call sites. A third mode
//! (say, reference-by-query) would be a local change here.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming;
use crate::profile::{EnvironmentProfile, LifecyclePolicy};

/// A request for an object-storage resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum StorageIntent {
    /// Provision a new bucket owned by this environment
    CreateNew {
        name: String,
        lifecycle: LifecyclePolicy,
    },
    /// Point at a bucket that already exists outside this plan
    ReferenceExisting { name: String },
}

impl StorageIntent {
    /// Resolve the storage decision for a profile.
    ///
    /// An ephemeral lifecycle or an explicit create flag means a new
    /// bucket, named from the environment and account suffix. Otherwise
    /// the caller asked to reference an existing bucket, and an absent
    /// name is a hard error - never a silent fallback to creation.
    pub fn resolve(profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        if profile.lifecycle.is_ephemeral() || profile.create_bucket {
            return Ok(Self::CreateNew {
                name: naming::bucket_name(&profile.name, &profile.account),
                lifecycle: profile.lifecycle,
            });
        }

        match profile.existing_bucket.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(Self::ReferenceExisting {
                name: name.to_string(),
            }),
            _ => Err(ConfigError::missing_field(
                profile.name.as_str(),
                "s3.bucketName",
            )),
        }
    }

    /// Effective bucket name, whichever mode was resolved
    pub fn name(&self) -> &str {
        match self {
            Self::CreateNew { name, .. } | Self::ReferenceExisting { name } => name,
        }
    }

    /// Whether this intent provisions a new resource
    pub fn is_create(&self) -> bool {
        matches!(self, Self::CreateNew { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AccountId, EnvName, ResourceSizing};

    fn profile(
        lifecycle: LifecyclePolicy,
        create_bucket: bool,
        existing: Option<&str>,
    ) -> EnvironmentProfile {
        EnvironmentProfile {
            name: EnvName::parse("dev").unwrap(),
            account: AccountId::parse("dev", "111111111111").unwrap(),
            region: "us-east-1".to_string(),
            sizing: ResourceSizing {
                memory_mib: 512,
                cpu_units: 256,
            },
            schedule: "cron(0 9 1 * ? *)".to_string(),
            lifecycle,
            create_bucket,
            existing_bucket: existing.map(String::from),
            upstream_account: None,
            image_tag: None,
        }
    }

    #[test]
    fn ephemeral_lifecycle_creates() {
        let intent = StorageIntent::resolve(&profile(LifecyclePolicy::Ephemeral, false, None)).unwrap();
        assert_eq!(
            intent,
            StorageIntent::CreateNew {
                name: "dev-data-pipeline-111111".to_string(),
                lifecycle: LifecyclePolicy::Ephemeral,
            }
        );
    }

    #[test]
    fn explicit_create_flag_creates_even_when_persistent() {
        let intent = StorageIntent::resolve(&profile(LifecyclePolicy::Persistent, true, None)).unwrap();
        assert!(intent.is_create());
    }

    #[test]
    fn persistent_without_flag_references_existing() {
        let intent = StorageIntent::resolve(&profile(
            LifecyclePolicy::Persistent,
            false,
            Some("my-existing-bucket"),
        ))
        .unwrap();
        assert_eq!(
            intent,
            StorageIntent::ReferenceExisting {
                name: "my-existing-bucket".to_string(),
            }
        );
    }

    #[test]
    fn reference_without_name_fails_closed() {
        let err = StorageIntent::resolve(&profile(LifecyclePolicy::Persistent, false, None))
            .unwrap_err();
        match err {
            ConfigError::MissingRequiredField { field, .. } => {
                assert_eq!(field, "s3.bucketName");
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn reference_with_blank_name_fails_closed() {
        let err = StorageIntent::resolve(&profile(LifecyclePolicy::Persistent, false, Some("  ")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredField { .. }));
    }
}
