//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Debug, Parser)]
#[command(name = "ndx", about = "Tools for the ndx-xarray extension", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the extension schema file pair.
    ExportSpec(ExportSpecArgs),
    /// List every external xarray dataset reference in a data file.
    Find(FindArgs),
}

#[derive(Debug, Args)]
pub struct ExportSpecArgs {
    /// Directory the schema files are written into.
    #[arg(long, default_value = "spec")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Data file to search.
    pub file: PathBuf,
}
