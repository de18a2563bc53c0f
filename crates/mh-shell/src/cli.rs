use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mh — highlight configured search terms in a page.
#[derive(Parser, Debug)]
#[command(name = "mh", version, about)]
pub struct Args {
    /// Settings file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Entry store path override.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a page description (JSON) and report the match count.
    Scan {
        /// Page file.
        page: PathBuf,

        /// Treat the scan as a completed tab update (honors auto mode).
        #[arg(long)]
        on_update: bool,
    },
    /// Print the active entry list as JSON.
    Export {
        /// List number; defaults to the selected list.
        #[arg(long)]
        list: Option<u32>,
    },
    /// Replace an entry list with the JSON array in FILE.
    Import {
        file: PathBuf,

        #[arg(long)]
        list: Option<u32>,
    },
    /// Add a word, or a /pattern/ or /pattern/i regex, to an entry list.
    Add {
        word: String,

        /// Highlight color (hex, rgb() or rgba()).
        #[arg(long, default_value = mh_config::DEFAULT_ENTRY_COLOR)]
        color: String,

        #[arg(long)]
        match_case: bool,

        #[arg(long)]
        whole_word: bool,

        #[arg(long)]
        list: Option<u32>,
    },
    /// Select the active entry list.
    Select { list: u32 },
    /// Turn scanning on every completed page load on or off.
    Auto { state: Toggle },
    /// Turn the scroll minimap on or off.
    Marks { state: Toggle },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

pub fn parse() -> Args {
    Args::parse()
}
