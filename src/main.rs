//! liteindex - generate a static JupyterLite contents index.
//!
//! Usage:
//!   liteindex <SOURCE_DIR> <OUTPUT_DIR>
//!
//! Scans SOURCE_DIR, writes the contents-API manifest to
//! OUTPUT_DIR/api/contents/all.json, and copies the visible file tree
//! into OUTPUT_DIR/files/ so a static front end can browse it.

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::Result;

use liteindex_core::{IndexError, PublishConfig};
use liteindex_publish::publish;

#[derive(Parser, Debug)]
#[command(
    name = "liteindex",
    version,
    about = "Static contents-API index generator for JupyterLite sites"
)]
struct Cli {
    /// Directory to index
    source_dir: PathBuf,

    /// Directory receiving api/contents/all.json and files/
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Missing arguments exit 1 with usage on stderr; help and version
    // keep their normal exit status.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => {
            eprint!("{err}");
            std::process::exit(1);
        }
    };

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = PublishConfig::new(&cli.source_dir, &cli.output_dir);
    // A missing source gets the one-line explanation; everything else is
    // an unexpected failure and goes through the full report.
    let report = match publish(&config) {
        Ok(report) => report,
        Err(err @ IndexError::SourceNotFound { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "Generated index with {} entries: {}",
        report.entry_count,
        report.manifest_path.display()
    );
    println!("Copied files to: {}", report.files_dir.display());

    Ok(())
}
