//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::duration::FormatStyle;

/// duration-parser - human-readable durations to seconds and back
#[derive(Parser, Debug)]
#[command(name = "duration-parser")]
#[command(version)]
#[command(about = "Convert human-readable durations like \"1d 2h 30m\" to seconds and back")]
#[command(long_about = None)]
pub struct Cli {
    /// Output style for rendered durations: short, compact or long
    #[arg(short = 's', long, global = true, value_name = "STYLE")]
    pub style: Option<FormatStyle>,

    /// Disable colored error output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a duration string (e.g., "2h 30m", "45 minutes", 1d5h15m)
    Parse {
        /// Duration text; multiple words are joined with spaces
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print total seconds instead of a rendered duration
        #[arg(long, conflicts_with = "json")]
        seconds: bool,

        /// Print seconds and every rendering as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a number of seconds as a duration
    Format {
        /// Total seconds
        #[arg(value_name = "SECONDS", allow_negative_numbers = true)]
        seconds: i64,

        /// Print seconds and every rendering as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parsed options for the parse and format commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    pub style: FormatStyle,
    pub json: bool,
    pub seconds: bool,
}
