use anyhow::{Context as _, Result};
use std::fs;

use crate::Context;
use crate::cli::CompileArgs;
use crate::config;
use crate::ui;

pub fn run(ctx: &Context, args: &CompileArgs) -> Result<()> {
    let dir = config::resolve_config_dir(args.config_dir.as_deref());
    let profile = config::load(&args.environment, &dir)?;
    let plan = intent::compile(&profile)?;
    let json = plan.to_json()?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("could not write plan to {}", path.display()))?;

            if !ctx.quiet {
                ui::success(&format!(
                    "compiled plan for '{}' to {}",
                    plan.environment,
                    path.display()
                ));
                summarize(ctx, &plan);
            }
        }
        None => {
            // The plan itself owns stdout; keep it parseable.
            println!("{json}");
        }
    }

    Ok(())
}

fn summarize(ctx: &Context, plan: &intent::Plan) {
    ui::dim(&format!(
        "{} intents ({} created)",
        plan.intents.len(),
        plan.created_count()
    ));
    if ctx.verbose > 0 {
        for intent in &plan.intents {
            ui::kv(intent.kind(), &intent.description());
        }
    }
    for binding in &plan.bindings {
        ui::kv(&binding.path, &binding.value);
    }
}
