//! Scheduled-trigger intent

use serde::{Deserialize, Serialize};

use crate::cron::CronExpression;
use crate::error::ConfigError;
use crate::naming;
use crate::profile::EnvironmentProfile;
use crate::resource::compute::ComputeIntent;

/// A recurring trigger firing the compute task
///
/// Holds the target cluster by name only - a weak reference; the schedule
/// does not own the compute resource's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleIntent {
    pub name: String,
    pub cron: CronExpression,
    pub target_cluster: String,
    pub target_task_family: String,
}

impl ScheduleIntent {
    /// Resolve the trigger, validating the schedule expression
    /// syntactically. The expression is otherwise taken verbatim from the
    /// profile.
    pub fn resolve(
        profile: &EnvironmentProfile,
        compute: &ComputeIntent,
    ) -> Result<Self, ConfigError> {
        let cron = CronExpression::parse(&profile.schedule).map_err(|err| {
            ConfigError::malformed(
                profile.name.as_str(),
                format!("resources.schedule '{}': {err}", profile.schedule),
            )
        })?;

        Ok(Self {
            name: naming::schedule_name(&profile.name),
            cron,
            target_cluster: compute.cluster_name.clone(),
            target_task_family: compute.task_family.clone(),
        })
    }
}
