use crate::interchange::InterchangeFormat;
use crate::models::DateGranularity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lessoncard
#[derive(Parser)]
#[command(
    name = "lessoncard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check, list and convert lesson-card attendance rows (CSV/JSON)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-project settings)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Validate every row of a lesson-card file
    Check {
        /// Input file (.json or .csv)
        file: String,

        #[command(flatten)]
        read: ReadArgs,
    },

    /// List the cells of a lesson-card file
    Show {
        /// Input file (.json or .csv)
        file: String,

        #[command(flatten)]
        read: ReadArgs,

        #[arg(long, help = "Print the listing as JSON")]
        json: bool,
    },

    /// Convert a lesson-card file between CSV and JSON, normalizing rows
    Convert {
        /// Input file (.json or .csv)
        input: String,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output file")]
        out: String,

        #[arg(long, value_enum, help = "Output format (default: from extension)")]
        to: Option<InterchangeFormat>,

        #[command(flatten)]
        read: ReadArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Options shared by every command that reads a lesson-card file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ReadArgs {
    #[arg(long = "format", value_enum, help = "Input format (default: from extension)")]
    pub format: Option<InterchangeFormat>,

    #[arg(long, value_enum, help = "Date granularity: day or timestamp")]
    pub granularity: Option<DateGranularity>,

    #[arg(
        long,
        help = "Keep rows marked replaced without a replacement date as scheduled lessons"
    )]
    pub lenient: bool,
}
