use crate::output::Output;
use clap::Args;
use engine::{adapter, palette, warehouse};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the TOML palette file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory [default: ./<theme-name>-theme]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Comma-separated adapters to run [default: all]
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub adapters: Vec<String>,
}

pub fn run_generate(args: GenerateArgs, output: &mut Output) -> anyhow::Result<()> {
    let model = palette::load(&args.input)?;
    let out_dir = args
        .output
        .unwrap_or_else(|| warehouse::default_output_dir(&model));

    let registry = adapter::registry();
    let names: Vec<&str> = args
        .adapters
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    for name in &names {
        if registry.get(name).is_none() {
            log::warn!("Unknown adapter '{name}' ignored");
            output.error_line(format!(
                "  warning: unknown adapter \"{name}\" (available: {})",
                registry.names().join(", ")
            ))?;
        }
    }

    let selected = registry.select(&names);
    if selected.is_empty() {
        output.line("No adapters selected. Nothing to generate.")?;
        return Ok(());
    }

    let written = warehouse::generate(&model, &selected, &out_dir)?;
    for file in &written {
        output.line(format!("  {} -> {}", file.adapter, file.path.display()))?;
    }
    output.line(format!(
        "Generated {} file(s) in {}",
        written.len(),
        out_dir.display()
    ))?;
    Ok(())
}
