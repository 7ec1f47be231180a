use clap::{Parser, Subcommand};

/// Command-line interface definition for movelog
#[derive(Parser)]
#[command(
    name = "movelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate office room-movement logs, report on them and export derived CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Without a subcommand the interactive shell is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: directory scan, report and optional export
    Shell,

    /// Write a default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Count regular files in a directory (non-recursive)
    Count {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: String,
    },

    /// Print the movement report for a CSV file
    Report {
        /// Movement CSV file
        file: String,

        #[arg(long, value_name = "DIR", help = "Also count the files in DIR")]
        dir: Option<String>,

        #[arg(long, value_name = "N", help = "Rows per section (default from config)")]
        limit: Option<usize>,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Write <PREFIX>_all.csv and <PREFIX>_work.csv from a CSV file
    Export {
        /// Movement CSV file
        file: String,

        #[arg(long, value_name = "PREFIX", help = "Output prefix (default from config)")]
        prefix: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,
    },
}
