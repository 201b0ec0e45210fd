use anyhow::Result;

use crate::Context;
use crate::config;
use crate::ui;

pub fn run(_ctx: &Context, config_dir: Option<&str>) -> Result<()> {
    let dir = config::resolve_config_dir(config_dir);
    let known = config::known_environments(&dir)?;

    ui::header(&format!("Environments in {}", dir.display()));

    if known.is_empty() {
        ui::warn("no environment documents found");
        return Ok(());
    }

    for (name, path) in &known {
        ui::kv(name, &path.display().to_string());
    }

    Ok(())
}
