//! Subcommand handlers. Each takes its parsed arguments, the shared
//! [`CommandContext`] and an [`Output`] to report through.

pub mod generate;
pub mod install;
pub mod list;
pub mod set;
pub mod switch;

use crate::cli::{Command, WarehouseArgs};
use crate::config::AppConfig;
use crate::output::Output;
use engine::activator::{ActivationContext, StateStore, SystemTools, ToolRunner};
use std::path::{Path, PathBuf};

/// Environment every command runs in.
pub struct CommandContext {
    pub home: PathBuf,
    pub config: AppConfig,
    pub tools: Box<dyn ToolRunner>,
}

impl CommandContext {
    pub fn new(home: PathBuf, config: AppConfig) -> Self {
        Self {
            home,
            config,
            tools: Box::new(SystemTools),
        }
    }

    /// The `--themes-dir` flag when given, else the configured directory.
    pub fn themes_dir<'a>(&'a self, args: &'a WarehouseArgs) -> &'a Path {
        args.themes_dir
            .as_deref()
            .unwrap_or_else(|| self.config.themes_dir())
    }

    pub fn state(&self) -> StateStore {
        StateStore::new(&self.home)
    }

    pub fn activation(&self) -> ActivationContext<'_> {
        ActivationContext::new(&self.home, self.tools.as_ref())
    }
}

pub fn dispatch(command: Command, ctx: &CommandContext, output: &mut Output) -> anyhow::Result<()> {
    match command {
        Command::Generate(args) => generate::run_generate(args, output),
        Command::Install(args) => install::run_install(args, ctx, output),
        Command::Switch(args) => switch::run_switch(args, ctx, output),
        Command::Set(args) => set::run_set(args, ctx, output),
        Command::List(args) => list::run_list(args, ctx, output),
    }
}
