use crate::commands::generate::GenerateArgs;
use crate::commands::install::InstallArgs;
use crate::commands::list::ListArgs;
use crate::commands::set::SetArgs;
use crate::commands::switch::SwitchArgs;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "the-themer",
    about = "Generate, install and switch terminal themes from one palette",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render themed config files from a TOML palette.
    Generate(GenerateArgs),

    /// Copy a theme's configs to where each application expects them.
    Install(InstallArgs),

    /// Activate a theme across every configured application.
    Switch(SwitchArgs),

    /// Choose the theme the `dark` or `light` alias resolves to.
    Set(SetArgs),

    /// Show the themes in the warehouse.
    List(ListArgs),
}

/// Location of the theme warehouse, shared by the warehouse commands.
#[derive(Debug, Clone, Default, Args)]
pub struct WarehouseArgs {
    /// Path to the themes directory [default: from config, else ./themes/]
    #[arg(long, value_name = "PATH")]
    pub themes_dir: Option<PathBuf>,
}
