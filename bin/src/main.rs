//! tickbar CLI - Aggregates tick CSV files into OHLCV bars.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tickbar")]
#[command(about = "Aggregates irregular trade ticks into OHLCV bars", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a folder of tick CSV files into OHLCV bars
    Aggregate {
        /// Folder containing tick CSV files (timestamp, price, volume)
        folder: PathBuf,

        /// Bucket width, e.g. "30s", "1m", "2h", "1h30m"
        #[arg(short, long, default_value = "1m")]
        interval: String,

        /// Output file path. Defaults to bars.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Use the legacy minute-relative bucketing formula instead of the
        /// epoch-aligned grid (reproduces the old tool bit-for-bit)
        #[arg(long)]
        minute_local: bool,
    },

    /// Sanitize a folder of tick CSV files and write the cleaned ticks
    Clean {
        /// Folder containing tick CSV files
        folder: PathBuf,

        /// Output file path. Defaults to ticks.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Report row and defect counts for a folder without writing output
    Inspect {
        /// Folder containing tick CSV files
        folder: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Aggregate {
            folder,
            interval,
            output,
            format,
            minute_local,
        } => {
            commands::aggregate::aggregate_folder(
                &folder,
                &interval,
                output,
                format,
                minute_local,
                cli.quiet,
            )
            .await
        }
        Commands::Clean { folder, output, format } => {
            commands::clean::clean_folder(&folder, output, format, cli.quiet).await
        }
        Commands::Inspect { folder } => commands::inspect::inspect_folder(&folder, cli.quiet).await,
    }
}
