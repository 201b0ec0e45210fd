use anyhow::Result;

use crate::Context;
use crate::cli::ValidateArgs;
use crate::config;
use crate::ui;

pub fn run(ctx: &Context, args: &ValidateArgs) -> Result<()> {
    let dir = config::resolve_config_dir(args.config_dir.as_deref());
    let profile = config::load(&args.environment, &dir)?;
    let plan = intent::compile(&profile)?;

    ui::success(&format!(
        "environment '{}' resolves to a valid plan",
        plan.environment
    ));

    if ctx.quiet {
        return Ok(());
    }

    ui::header("Resolved intents");
    for intent in &plan.intents {
        ui::kv(intent.kind(), &intent.description());
    }

    ui::header("Parameter bindings");
    for binding in &plan.bindings {
        ui::kv(&binding.path, &binding.value);
    }

    Ok(())
}
