//! Configuration loading - environment documents to profiles
//!
//! One document per environment (`<name>.json` or `<name>.toml`) in the
//! config directory. The set of known environments is whatever the
//! directory enumerates, closed at invocation time. Loading is the only
//! I/O in the pipeline; everything after it is pure.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use intent::{AccountId, ConfigError, EnvName, EnvironmentProfile, LifecyclePolicy, ResourceSizing};

/// Resolve the config directory: an explicit flag (tilde-expanded) wins,
/// then `./environments`, then `~/.config/stackplan/environments`.
pub fn resolve_config_dir(flag: Option<&str>) -> PathBuf {
    if let Some(dir) = flag {
        let expanded = shellexpand::tilde(dir);
        return PathBuf::from(expanded.as_ref());
    }

    let local = PathBuf::from("environments");
    if local.is_dir() {
        return local;
    }

    dirs::home_dir()
        .map(|home| home.join(".config").join("stackplan").join("environments"))
        .unwrap_or(local)
}

/// Enumerate the known environments: every `<name>.json|toml` in the
/// directory, sorted by name.
pub fn known_environments(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("could not read config directory {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "json" || e == "toml");
        if !is_document {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            found.push((stem.to_string(), path.clone()));
        }
    }
    found.sort();
    Ok(found)
}

/// Load and validate the profile for one environment.
pub fn load(name: &str, dir: &Path) -> Result<EnvironmentProfile, ConfigError> {
    let known = known_environments(dir).map_err(|_| ConfigError::SourceNotFound {
        environment: name.to_string(),
        path: dir.to_path_buf(),
    })?;

    let Some((_, path)) = known.iter().find(|(env, _)| env == name) else {
        let names: Vec<&str> = known.iter().map(|(env, _)| env.as_str()).collect();
        return Err(ConfigError::UnknownEnvironment {
            name: name.to_string(),
            known: if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            },
        });
    };

    let raw = fs::read_to_string(path).map_err(|_| ConfigError::SourceNotFound {
        environment: name.to_string(),
        path: path.clone(),
    })?;

    let document = parse_document(name, path, &raw)?;
    document.into_profile(name)
}

fn parse_document(
    name: &str,
    path: &Path,
    raw: &str,
) -> Result<EnvironmentDocument, ConfigError> {
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    if is_toml {
        toml::from_str(raw).map_err(|err| ConfigError::malformed(name, err.to_string()))
    } else {
        serde_json::from_str(raw).map_err(|err| ConfigError::malformed(name, err.to_string()))
    }
}

// ============================================================================
// Document shape
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EnvironmentDocument {
    account_id: String,
    region: String,
    environment: String,
    s3: S3Section,
    resources: ResourcesSection,
    #[serde(default)]
    promotion: Option<PromotionSection>,
    #[serde(default)]
    image: Option<ImageSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct S3Section {
    create_bucket: bool,
    #[serde(default)]
    bucket_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ResourcesSection {
    ecs_memory: i64,
    ecs_cpu: i64,
    schedule: String,
    removal_policy: RemovalPolicy,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum RemovalPolicy {
    #[serde(rename = "DESTROY")]
    Destroy,
    #[serde(rename = "RETAIN")]
    Retain,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PromotionSection {
    #[serde(default)]
    upstream_account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ImageSection {
    #[serde(default)]
    tag: Option<String>,
}

impl EnvironmentDocument {
    fn into_profile(self, name: &str) -> Result<EnvironmentProfile, ConfigError> {
        let env_name = EnvName::parse(name)?;

        if self.environment != name {
            return Err(ConfigError::malformed(
                name,
                format!(
                    "document field 'environment' is '{}' but the document is named '{name}'",
                    self.environment
                ),
            ));
        }

        if self.region.trim().is_empty() {
            return Err(ConfigError::missing_field(name, "region"));
        }
        if self.resources.schedule.trim().is_empty() {
            return Err(ConfigError::missing_field(name, "resources.schedule"));
        }

        let account = AccountId::parse(name, &self.account_id)?;

        let upstream_account = match self.promotion {
            None => None,
            Some(promotion) => match promotion.upstream_account_id.as_deref() {
                Some(id) if !id.trim().is_empty() => Some(AccountId::parse(name, id)?),
                _ => {
                    return Err(ConfigError::missing_field(
                        name,
                        "promotion.upstreamAccountId",
                    ));
                }
            },
        };

        let image_tag = self
            .image
            .and_then(|image| image.tag)
            .filter(|tag| !tag.trim().is_empty());

        Ok(EnvironmentProfile {
            name: env_name,
            account,
            region: self.region,
            sizing: ResourceSizing {
                memory_mib: self.resources.ecs_memory,
                cpu_units: self.resources.ecs_cpu,
            },
            schedule: self.resources.schedule,
            lifecycle: match self.resources.removal_policy {
                RemovalPolicy::Destroy => LifecyclePolicy::Ephemeral,
                RemovalPolicy::Retain => LifecyclePolicy::Persistent,
            },
            create_bucket: self.s3.create_bucket,
            existing_bucket: self.s3.bucket_name,
            upstream_account,
            image_tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_DOC: &str = r#"{
        "accountId": "111111111111",
        "region": "us-east-1",
        "environment": "dev",
        "s3": { "createBucket": true },
        "resources": {
            "ecsMemory": 512,
            "ecsCpu": 256,
            "schedule": "cron(0 9 1 * ? *)",
            "removalPolicy": "DESTROY"
        }
    }"#;

    fn write_doc(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(format!("{name}.json")), contents).unwrap();
    }

    #[test]
    fn loads_a_dev_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "dev", DEV_DOC);

        let profile = load("dev", dir.path()).unwrap();
        assert_eq!(profile.name.as_str(), "dev");
        assert_eq!(profile.account.as_str(), "111111111111");
        assert_eq!(profile.lifecycle, LifecyclePolicy::Ephemeral);
        assert!(profile.create_bucket);
        assert!(profile.upstream_account.is_none());
        assert!(profile.image_tag.is_none());
    }

    #[test]
    fn loads_a_toml_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("prod.toml"),
            r#"
accountId = "222222222222"
region = "us-east-1"
environment = "prod"

[s3]
createBucket = false
bucketName = "my-existing-bucket"

[resources]
ecsMemory = 1024
ecsCpu = 512
schedule = "cron(0 0 15 * ? *)"
removalPolicy = "RETAIN"

[promotion]
upstreamAccountId = "111111111111"

[image]
tag = "v1.4.2"
"#,
        )
        .unwrap();

        let profile = load("prod", dir.path()).unwrap();
        assert_eq!(profile.lifecycle, LifecyclePolicy::Persistent);
        assert_eq!(profile.existing_bucket.as_deref(), Some("my-existing-bucket"));
        assert_eq!(
            profile.upstream_account.as_ref().map(AccountId::as_str),
            Some("111111111111")
        );
        assert_eq!(profile.image_tag.as_deref(), Some("v1.4.2"));
    }

    #[test]
    fn unknown_environment_lists_known_set() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "dev", DEV_DOC);

        let err = load("staging", dir.path()).unwrap_err();
        match err {
            ConfigError::UnknownEnvironment { name, known } => {
                assert_eq!(name, "staging");
                assert_eq!(known, "dev");
            }
            other => panic!("expected UnknownEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn missing_config_dir_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        let err = load("dev", &missing).unwrap_err();
        assert!(matches!(err, ConfigError::SourceNotFound { .. }));
    }

    #[test]
    fn unparseable_document_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "dev", "{ not json");

        let err = load("dev", dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedDocument { .. }));
    }

    #[test]
    fn environment_field_must_match_document_name() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "prod", DEV_DOC);

        let err = load("prod", dir.path()).unwrap_err();
        match err {
            ConfigError::MalformedDocument { detail, .. } => {
                assert!(detail.contains("environment"));
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn promotion_without_upstream_account_is_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "prod",
            r#"{
                "accountId": "222222222222",
                "region": "us-east-1",
                "environment": "prod",
                "s3": { "createBucket": false, "bucketName": "b" },
                "resources": {
                    "ecsMemory": 1024,
                    "ecsCpu": 512,
                    "schedule": "cron(0 0 15 * ? *)",
                    "removalPolicy": "RETAIN"
                },
                "promotion": {}
            }"#,
        );

        let err = load("prod", dir.path()).unwrap_err();
        match err {
            ConfigError::MissingRequiredField { field, .. } => {
                assert_eq!(field, "promotion.upstreamAccountId");
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn known_environments_enumerates_sorted_documents() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "prod", DEV_DOC);
        write_doc(dir.path(), "dev", DEV_DOC);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let known = known_environments(dir.path()).unwrap();
        let names: Vec<&str> = known.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["dev", "prod"]);
    }

    #[test]
    fn loaded_profile_compiles_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "dev", DEV_DOC);

        let profile = load("dev", dir.path()).unwrap();
        let plan = intent::compile(&profile).unwrap();
        assert_eq!(plan.intents.len(), 4);
        assert_eq!(plan.intents[0].id(), "dev-data-pipeline-111111");
    }
}
