use super::CommandContext;
use crate::cli::WarehouseArgs;
use crate::error::CliError;
use crate::output::Output;
use clap::Args;
use engine::activator::{self, resolve_theme_name};
use engine::warehouse;

#[derive(Debug, Args)]
pub struct SwitchArgs {
    /// Theme to activate, or `dark`/`light` for the configured default
    pub theme: String,

    #[command(flatten)]
    pub warehouse: WarehouseArgs,
}

/// Switch every application to the theme and record it as current. The
/// state file is only written when every application succeeded.
pub fn run_switch(args: SwitchArgs, ctx: &CommandContext, output: &mut Output) -> anyhow::Result<()> {
    let state = ctx.state();
    let name = resolve_theme_name(&state, &args.theme)?;
    if name != args.theme {
        output.line(format!("Resolving \"{}\" to \"{name}\"", args.theme))?;
    }

    let theme = warehouse::load_theme(ctx.themes_dir(&args.warehouse), &name)?;

    let outcomes = activator::switch(&theme, &ctx.activation());
    if output.outcomes(&outcomes)? {
        return Err(CliError::ActivationFailed { command: "switch" }.into());
    }

    if let Err(e) = state.write_current(&theme.name) {
        log::warn!("Could not record current theme: {e}");
        output.error_line(format!("  state: WARNING could not write state: {e}"))?;
    }

    output.line(format!("Switched to theme \"{}\"", theme.name))?;
    Ok(())
}
