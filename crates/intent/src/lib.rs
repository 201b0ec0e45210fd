//! # Intent
//!
//! A library for compiling environment profiles into ordered,
//! declarative resource-provisioning plans.
//!
//! ## Core Concepts
//!
//! - **EnvironmentProfile**: one deployment target, fully described
//! - **Intent**: a declarative description of a desired resource, not
//!   yet applied (create-vs-reference is a tagged variant, resolved in
//!   one place)
//! - **GrantStatement**: least-privilege cross-environment pull access,
//!   for the build-once-promote-by-reference pattern
//! - **Plan**: an ordered sequence of resolved intents plus published
//!   parameter bindings, ready for an external provisioner
//!
//! The pipeline is strictly one-directional and all-or-nothing:
//!
//! ```text
//! profile -> resolve intents -> attach grants -> emit plan
//! ```
//!
//! Everything here is pure; loading configuration documents and writing
//! plan files belong to the binary.
//!
//! ## Example
//!
//! ```
//! use intent::{
//!     AccountId, EnvName, EnvironmentProfile, LifecyclePolicy,
//!     ResourceSizing, compile,
//! };
//!
//! let profile = EnvironmentProfile {
//!     name: EnvName::parse("dev")?,
//!     account: AccountId::parse("dev", "111111111111")?,
//!     region: "us-east-1".to_string(),
//!     sizing: ResourceSizing { memory_mib: 512, cpu_units: 256 },
//!     schedule: "cron(0 9 1 * ? *)".to_string(),
//!     lifecycle: LifecyclePolicy::Ephemeral,
//!     create_bucket: true,
//!     existing_bucket: None,
//!     upstream_account: None,
//!     image_tag: None,
//! };
//!
//! let plan = compile(&profile)?;
//! assert_eq!(plan.intents.len(), 4);
//! # Ok::<(), intent::ConfigError>(())
//! ```

pub mod compile;
pub mod cron;
pub mod error;
pub mod grants;
pub mod naming;
pub mod plan;
pub mod profile;
pub mod resource;

// Re-export main types at crate root
pub use compile::compile;
pub use cron::{CronExpression, CronParseError};
pub use error::ConfigError;
pub use grants::{GrantStatement, PULL_ACTIONS, pull_grants};
pub use plan::{Output, ParameterBinding, Plan};
pub use profile::{AccountId, EnvName, EnvironmentProfile, LifecyclePolicy, ResourceSizing};
pub use resource::{
    ComputeIntent, ImageReference, Intent, NetworkMode, RegistryIntent, ScheduleIntent,
    StorageIntent,
};
