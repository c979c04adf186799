use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use recast_cli::logging::{init_logging, LoggingConfig};
use recast_cli::{catalog_listing, run, TranslateOptions};

#[derive(Parser)]
#[command(name = "recast", version, about = "Translate Android layout XML into Jetpack Compose")]
struct Cli {
    /// Layout files to translate
    #[arg(required_unless_present = "list_widgets")]
    inputs: Vec<PathBuf>,

    /// Directory for generated `.kt` files (default: next to each input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a complete file: imports, a @Composable function and a preview
    #[arg(short, long)]
    complete: bool,

    /// Reject attributes a tag does not understand instead of warning
    #[arg(long)]
    strict: bool,

    /// Print generated code instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Print the supported tags and attributes, then exit
    #[arg(long)]
    list_widgets: bool,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::verbose(cli.verbose));

    if cli.list_widgets {
        print!("{}", catalog_listing());
        return Ok(());
    }

    let options = TranslateOptions {
        output_dir: cli.output,
        complete: cli.complete,
        strict: cli.strict,
        to_stdout: cli.stdout,
    };
    let summary = run(&cli.inputs, &options);
    log::info!("{} translated, {} failed", summary.translated.len(), summary.failed.len());

    if !summary.failed.is_empty() {
        bail!("{} of {} file(s) could not be translated", summary.failed.len(), cli.inputs.len());
    }
    Ok(())
}
