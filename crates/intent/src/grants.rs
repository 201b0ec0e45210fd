//! Cross-environment pull grants
//!
//! Build once upstream, promote by reference downstream: a privileged
//! environment's registry grants its upstream account exactly the actions
//! needed to authenticate and pull image layers, never to push. Grants are
//! additive, scoped to a single named principal and a fixed action list;
//! neither a wildcard principal nor a wildcard action set can be
//! expressed through this module.

use serde::{Deserialize, Serialize};

use crate::profile::{AccountId, EnvironmentProfile};

/// The minimal action set for authenticating and pulling image layers
pub const PULL_ACTIONS: [&str; 4] = [
    "registry:GetAuthorizationToken",
    "registry:BatchCheckLayerAvailability",
    "registry:GetDownloadUrlForLayer",
    "registry:BatchGetImage",
];

/// One access-policy statement attached to a registry
///
/// Fields are private: the only constructor is [`GrantStatement::pull`],
/// which fixes the action list and requires a validated account principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantStatement {
    principal: AccountId,
    actions: [String; 4],
}

impl GrantStatement {
    /// A read-only pull grant for one named account
    pub fn pull(principal: AccountId) -> Self {
        Self {
            principal,
            actions: PULL_ACTIONS.map(String::from),
        }
    }

    pub fn principal(&self) -> &AccountId {
        &self.principal
    }

    pub fn actions(&self) -> &[String; 4] {
        &self.actions
    }
}

/// Pull grants for a profile: exactly one statement for the configured
/// upstream account when the environment is privileged, otherwise empty -
/// no implicit cross-environment trust.
pub fn pull_grants(profile: &EnvironmentProfile) -> Vec<GrantStatement> {
    profile
        .upstream_account
        .clone()
        .map(GrantStatement::pull)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EnvName, LifecyclePolicy, ResourceSizing};

    fn profile(upstream: Option<&str>) -> EnvironmentProfile {
        EnvironmentProfile {
            name: EnvName::parse("prod").unwrap(),
            account: AccountId::parse("prod", "222222222222").unwrap(),
            region: "us-east-1".to_string(),
            sizing: ResourceSizing {
                memory_mib: 1024,
                cpu_units: 512,
            },
            schedule: "cron(0 0 15 * ? *)".to_string(),
            lifecycle: LifecyclePolicy::Persistent,
            create_bucket: false,
            existing_bucket: Some("my-existing-bucket".to_string()),
            upstream_account: upstream.map(|a| AccountId::parse("prod", a).unwrap()),
            image_tag: None,
        }
    }

    #[test]
    fn non_privileged_environment_gets_no_grants() {
        assert!(pull_grants(&profile(None)).is_empty());
    }

    #[test]
    fn privileged_environment_gets_exactly_one_grant() {
        let grants = pull_grants(&profile(Some("111111111111")));
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].principal().as_str(), "111111111111");
    }

    #[test]
    fn action_set_is_the_fixed_pull_set() {
        let grants = pull_grants(&profile(Some("111111111111")));
        let actions = grants[0].actions();
        assert_eq!(actions.len(), 4);
        for (action, expected) in actions.iter().zip(PULL_ACTIONS) {
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn no_write_actions_ever_appear() {
        let grants = pull_grants(&profile(Some("111111111111")));
        for action in grants[0].actions() {
            let lower = action.to_ascii_lowercase();
            assert!(!lower.contains("put"));
            assert!(!lower.contains("push"));
            assert!(!lower.contains("write"));
            assert!(!lower.contains('*'));
        }
    }

    #[test]
    fn wildcard_principal_cannot_be_expressed() {
        // AccountId is the only accepted principal type and rejects
        // anything that is not a digit string.
        assert!(AccountId::parse("prod", "*").is_err());
    }
}
