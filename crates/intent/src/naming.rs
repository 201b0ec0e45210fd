//! Resource naming
//!
//! Every emitted identifier and parameter path is derived here, from
//! (environment name, resource kind) alone. Keeping the templates in one
//! module makes each name unit-testable and guarantees two intents in the
//! same plan can never collide.

use crate::profile::{AccountId, EnvName};

/// Application namespace embedded in every resource name and path
pub const APP_NAMESPACE: &str = "data-pipeline";

/// Storage bucket name: `{env}-data-pipeline-{last6(accountId)}`
///
/// The account suffix keeps bucket names unique across accounts sharing
/// a global namespace.
pub fn bucket_name(env: &EnvName, account: &AccountId) -> String {
    format!("{env}-{APP_NAMESPACE}-{}", account.suffix())
}

/// Container registry name: `{env}-data-pipeline`
pub fn registry_name(env: &EnvName) -> String {
    format!("{env}-{APP_NAMESPACE}")
}

/// Registry URI: `{accountId}.registry.{region}/{name}`
pub fn registry_uri(account: &AccountId, region: &str, name: &str) -> String {
    format!("{account}.registry.{region}/{name}")
}

/// Compute cluster name: `{env}-data-pipeline-cluster`
pub fn cluster_name(env: &EnvName) -> String {
    format!("{env}-{APP_NAMESPACE}-cluster")
}

/// Task template family name: `{env}-data-pipeline-task`
pub fn task_family(env: &EnvName) -> String {
    format!("{env}-{APP_NAMESPACE}-task")
}

/// Scheduled trigger name: `{env}-data-pipeline-schedule`
pub fn schedule_name(env: &EnvName) -> String {
    format!("{env}-{APP_NAMESPACE}-schedule")
}

/// Parameter path: `/{env}/data-pipeline/{kind}`
pub fn parameter_path(env: &EnvName, kind: &str) -> String {
    format!("/{env}/{APP_NAMESPACE}/{kind}")
}
