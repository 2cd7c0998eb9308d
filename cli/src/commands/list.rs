use super::CommandContext;
use crate::cli::WarehouseArgs;
use crate::output::Output;
use clap::Args;
use engine::activator::Variant;
use engine::warehouse;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub warehouse: WarehouseArgs,
}

/// `* bleu (current, default dark)`: a star marks the current theme and
/// the parenthesized tags name everything that points at it.
fn describe(name: &str, current: &str, dark: &str, light: &str) -> String {
    let mut tags = Vec::new();
    if name == current {
        tags.push("current");
    }
    if name == dark {
        tags.push("default dark");
    }
    if name == light {
        tags.push("default light");
    }

    let marker = if name == current { '*' } else { ' ' };
    if tags.is_empty() {
        format!("{marker} {name}")
    } else {
        format!("{marker} {name} ({})", tags.join(", "))
    }
}

pub fn run_list(args: ListArgs, ctx: &CommandContext, output: &mut Output) -> anyhow::Result<()> {
    let root = ctx.themes_dir(&args.warehouse);
    let themes = warehouse::list_themes(root)?;
    if themes.is_empty() {
        output.line(format!("No themes found in {}", root.display()))?;
        return Ok(());
    }

    let state = ctx.state();
    let current = state.read_current()?;
    let dark = state.read_default(Variant::Dark)?;
    let light = state.read_default(Variant::Light)?;

    for name in &themes {
        output.line(describe(name, &current, &dark, &light))?;
    }
    Ok(())
}
