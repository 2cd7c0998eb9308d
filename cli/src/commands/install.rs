use super::CommandContext;
use crate::cli::WarehouseArgs;
use crate::error::CliError;
use crate::output::Output;
use clap::Args;
use engine::{activator, warehouse};

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Theme to install
    pub theme: String,

    #[command(flatten)]
    pub warehouse: WarehouseArgs,
}

pub fn run_install(args: InstallArgs, ctx: &CommandContext, output: &mut Output) -> anyhow::Result<()> {
    let theme = warehouse::load_theme(ctx.themes_dir(&args.warehouse), &args.theme)?;

    let outcomes = activator::install(&theme, &ctx.activation());
    if output.outcomes(&outcomes)? {
        return Err(CliError::ActivationFailed { command: "install" }.into());
    }

    output.line(format!("Installed theme \"{}\"", theme.name))?;
    Ok(())
}
