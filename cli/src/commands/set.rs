use super::CommandContext;
use crate::cli::WarehouseArgs;
use crate::output::Output;
use clap::{Args, ValueEnum};
use engine::activator::Variant;
use engine::warehouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Dark,
    Light,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Dark => Variant::Dark,
            VariantArg::Light => Variant::Light,
        }
    }
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Which alias to set
    pub variant: VariantArg,

    /// Theme the alias should resolve to
    pub theme: String,

    #[command(flatten)]
    pub warehouse: WarehouseArgs,
}

/// Record the default for a variant after checking the theme loads.
pub fn run_set(args: SetArgs, ctx: &CommandContext, output: &mut Output) -> anyhow::Result<()> {
    let variant = Variant::from(args.variant);
    let theme = warehouse::load_theme(ctx.themes_dir(&args.warehouse), &args.theme)?;

    ctx.state().write_default(variant, &theme.name)?;
    output.line(format!("Set {variant} default to \"{}\"", theme.name))?;
    Ok(())
}
