//! The plan compiler
//!
//! One pass from an environment profile to an ordered plan:
//! storage -> registry -> compute -> schedule -> parameter bindings ->
//! outputs. Later intents reference earlier ones by identifier, so the
//! order is a topological property the emitter preserves, not a
//! convention. Compilation is all-or-nothing: the first resolution
//! failure aborts and no partial plan is ever produced.

use crate::error::ConfigError;
use crate::naming;
use crate::plan::{Output, ParameterBinding, Plan};
use crate::profile::EnvironmentProfile;
use crate::resource::{ComputeIntent, Intent, RegistryIntent, ScheduleIntent, StorageIntent};

/// Compile a profile into a plan. Pure and deterministic: identical
/// profiles yield byte-identical plans.
pub fn compile(profile: &EnvironmentProfile) -> Result<Plan, ConfigError> {
    let storage = StorageIntent::resolve(profile)?;
    let registry = RegistryIntent::resolve(profile);
    let compute = ComputeIntent::resolve(profile, &registry)?;
    let schedule = ScheduleIntent::resolve(profile, &compute)?;

    let registry_uri = registry.uri(profile);
    let bindings = vec![
        ParameterBinding {
            path: naming::parameter_path(&profile.name, "bucket-name"),
            value: storage.name().to_string(),
        },
        ParameterBinding {
            path: naming::parameter_path(&profile.name, "registry-uri"),
            value: registry_uri.clone(),
        },
        ParameterBinding {
            path: naming::parameter_path(&profile.name, "cluster-name"),
            value: compute.cluster_name.clone(),
        },
        ParameterBinding {
            path: naming::parameter_path(&profile.name, "image-tag"),
            value: compute.image.tag.clone(),
        },
    ];

    // Same resolved data, named for operators instead of machines.
    let outputs = bindings
        .iter()
        .map(|b| Output {
            name: b
                .path
                .rsplit('/')
                .next()
                .unwrap_or(b.path.as_str())
                .to_string(),
            value: b.value.clone(),
        })
        .collect();

    let plan = Plan {
        environment: profile.name.clone(),
        intents: vec![
            Intent::Storage(storage),
            Intent::Registry(registry),
            Intent::Compute(compute),
            Intent::Schedule(schedule),
        ],
        bindings,
        outputs,
    };
    plan.debug_check_unique();

    log::debug!(
        "compiled plan for '{}': {} intents ({} created)",
        profile.name,
        plan.intents.len(),
        plan.created_count()
    );

    Ok(plan)
}
