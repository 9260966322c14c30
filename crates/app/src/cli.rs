//! Command-line arguments for the script driver.

use clap::Parser;
use std::path::PathBuf;

/// Replays an edit script against a piece-table document
#[derive(Parser, Debug)]
#[command(name = "piece-edit", version, about = "Replays an edit script against a document")]
pub struct CliArgs {
    /// Script to replay; reads stdin when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Initial document text
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Keep at most N history snapshots
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    /// Never merge consecutive inserts into one piece
    #[arg(long)]
    pub no_coalesce: bool,
}

impl CliArgs {
    pub fn editor_options(&self) -> editor_core::EditorOptions {
        editor_core::EditorOptions::default()
            .with_history_limit(self.history_limit)
            .with_coalesce_inserts(!self.no_coalesce)
    }
}
