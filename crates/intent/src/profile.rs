//! Environment profiles - the root context for plan compilation
//!
//! A profile identifies one deployment target (environment name, account,
//! region, sizing, schedule, lifecycle). It is constructed once per
//! invocation from the loaded configuration document and never mutated;
//! every intent consults it during resolution but none of them own it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Validated environment name (e.g. "dev", "prod")
///
/// Lowercase alphanumeric plus dashes. The known set is enumerated by the
/// configuration loader and closed at invocation time; this type only
/// enforces the lexical shape so names can be embedded in resource
/// identifiers and parameter paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvName(String);

impl EnvName {
    /// Parse an environment name, rejecting anything that cannot be
    /// embedded in a resource identifier.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !name.starts_with('-')
            && !name.ends_with('-');

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigError::malformed(
                name,
                format!("'{name}' is not a valid environment name (lowercase alphanumeric and dashes)"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque account identifier
///
/// Treated as an opaque string except that naming takes a 6-character
/// suffix, so it must carry at least 6 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn parse(environment: &str, raw: &str) -> Result<Self, ConfigError> {
        if raw.len() >= 6 && raw.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ConfigError::malformed(
                environment,
                format!("'{raw}' is not a valid account id (expected 6+ digits)"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last 6 characters, used as a naming suffix to keep resource names
    /// unique across accounts without embedding the full identifier.
    pub fn suffix(&self) -> &str {
        &self.0[self.0.len() - 6..]
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Governs whether a created resource is destroyed or retained on teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePolicy {
    /// Resource is destroyed when the environment is torn down
    Ephemeral,
    /// Resource survives teardown
    Persistent,
}

impl LifecyclePolicy {
    pub fn is_ephemeral(self) -> bool {
        matches!(self, Self::Ephemeral)
    }
}

impl fmt::Display for LifecyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ephemeral => f.write_str("ephemeral"),
            Self::Persistent => f.write_str("persistent"),
        }
    }
}

/// Task sizing as declared in the document
///
/// Kept signed so that non-positive values reach the sizing check and are
/// reported as `InvalidSizing` rather than failing opaquely during
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSizing {
    pub memory_mib: i64,
    pub cpu_units: i64,
}

impl ResourceSizing {
    /// Reject non-positive values, naming the offending document field.
    pub fn validate(&self, environment: &EnvName) -> Result<(), ConfigError> {
        if self.memory_mib <= 0 {
            return Err(ConfigError::InvalidSizing {
                environment: environment.to_string(),
                field: "resources.ecsMemory".to_string(),
                value: self.memory_mib,
            });
        }
        if self.cpu_units <= 0 {
            return Err(ConfigError::InvalidSizing {
                environment: environment.to_string(),
                field: "resources.ecsCpu".to_string(),
                value: self.cpu_units,
            });
        }
        Ok(())
    }
}

/// One deployment target, fully described
///
/// Immutable after construction; owned exclusively by the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub name: EnvName,
    pub account: AccountId,
    pub region: String,
    pub sizing: ResourceSizing,
    /// Cron-style schedule expression, validated during resolution
    pub schedule: String,
    pub lifecycle: LifecyclePolicy,
    /// Explicit request to create the storage bucket even when the
    /// lifecycle alone would not imply it
    pub create_bucket: bool,
    /// Name of a pre-existing bucket to reference instead of creating one
    pub existing_bucket: Option<String>,
    /// Upstream account allowed to pull from this environment's registry.
    /// Present only for privileged/downstream environments.
    pub upstream_account: Option<AccountId>,
    /// Image tag pin; `None` resolves to the mutable "latest" marker
    pub image_tag: Option<String>,
}

impl EnvironmentProfile {
    /// Whether this environment consumes artifacts built upstream and may
    /// therefore receive cross-environment grants.
    pub fn is_privileged(&self) -> bool {
        self.upstream_account.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_name_accepts_lowercase_and_dashes() {
        assert!(EnvName::parse("dev").is_ok());
        assert!(EnvName::parse("prod-eu-1").is_ok());
    }

    #[test]
    fn env_name_rejects_bad_shapes() {
        assert!(EnvName::parse("").is_err());
        assert!(EnvName::parse("Prod").is_err());
        assert!(EnvName::parse("-dev").is_err());
        assert!(EnvName::parse("dev-").is_err());
        assert!(EnvName::parse("dev env").is_err());
    }

    #[test]
    fn account_id_suffix_is_last_six() {
        let account = AccountId::parse("dev", "111122223333").unwrap();
        assert_eq!(account.suffix(), "223333");
    }

    #[test]
    fn account_id_rejects_short_or_non_digit() {
        assert!(AccountId::parse("dev", "12345").is_err());
        assert!(AccountId::parse("dev", "12345abc6789").is_err());
        assert!(AccountId::parse("dev", "").is_err());
    }

    #[test]
    fn sizing_rejects_non_positive() {
        let env = EnvName::parse("dev").unwrap();
        let bad_memory = ResourceSizing {
            memory_mib: 0,
            cpu_units: 256,
        };
        match bad_memory.validate(&env) {
            Err(ConfigError::InvalidSizing { field, value, .. }) => {
                assert_eq!(field, "resources.ecsMemory");
                assert_eq!(value, 0);
            }
            other => panic!("expected InvalidSizing, got {other:?}"),
        }

        let bad_cpu = ResourceSizing {
            memory_mib: 512,
            cpu_units: -1,
        };
        match bad_cpu.validate(&env) {
            Err(ConfigError::InvalidSizing { field, .. }) => {
                assert_eq!(field, "resources.ecsCpu");
            }
            other => panic!("expected InvalidSizing, got {other:?}"),
        }
    }

    #[test]
    fn sizing_accepts_positive() {
        let env = EnvName::parse("dev").unwrap();
        let sizing = ResourceSizing {
            memory_mib: 512,
            cpu_units: 256,
        };
        assert!(sizing.validate(&env).is_ok());
    }
}
