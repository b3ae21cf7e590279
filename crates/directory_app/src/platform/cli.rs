use std::path::PathBuf;

use clap::Parser;

/// Browse a public directory of assistance programs from the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "program-directory", version)]
pub struct Cli {
    /// RON config file with `source` and `options`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Full URL of a gviz-style JSON endpoint.
    #[arg(long, conflicts_with = "sheet_id")]
    pub url: Option<String>,

    /// Google Sheet id; the sheet must be shared as "anyone with the link".
    #[arg(long)]
    pub sheet_id: Option<String>,

    /// Sheet tab id, when the data is not on the first tab.
    #[arg(long, requires = "sheet_id")]
    pub gid: Option<String>,

    #[arg(long)]
    pub page_size: Option<usize>,

    /// Keep rows whose name cell is blank.
    #[arg(long)]
    pub keep_blank_names: bool,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
