mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "framegen")]
#[command(about = "Generate structured business frameworks from a generation API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Base URL of the generation API (overrides config)")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        default_value = ".",
        global = true,
        help = "Directory that exported files are written to"
    )]
    pub output_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}
