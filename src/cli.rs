use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tocheck",
    version,
    about = "Check a table-of-contents spreadsheet against the text of its EPUB"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check(CheckArgs),
    Extract(ExtractArgs),
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(long)]
    pub toc: Option<PathBuf>,

    #[arg(long)]
    pub epub: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "chapter")]
    pub toc_pattern: String,

    #[arg(long)]
    pub normalization_table: Option<PathBuf>,

    #[arg(long, default_value_t = 2)]
    pub title_column: u32,

    #[arg(long, default_value_t = 3)]
    pub level_column: u32,

    #[arg(long, default_value_t = 1)]
    pub header_rows: u32,

    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub no_open: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub epub: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub normalized: bool,

    #[arg(long)]
    pub normalization_table: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    #[arg(long)]
    pub text: String,

    #[arg(long)]
    pub normalization_table: Option<PathBuf>,
}
