use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the available framework types")]
    Types,

    #[command(about = "Browse example frameworks")]
    Examples {
        #[arg(long, value_name = "TYPE", help = "Show the example for one framework type")]
        show: Option<String>,
    },

    #[command(about = "Generate a framework of the given type")]
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(long = "type", value_name = "TYPE", help = "Framework type key, e.g. linear")]
    pub framework_type: String,

    #[arg(long)]
    pub industry: String,

    #[arg(long)]
    pub purpose: String,

    #[arg(long, help = "Target audience")]
    pub audience: String,

    #[arg(long, default_value = framegen_types::request::DEFAULT_COMPLEXITY)]
    pub complexity: String,

    #[arg(long, help = "Write JSON and text exports to the output directory")]
    pub export: bool,

    #[arg(long, value_name = "FILE", help = "Also write the rendered page as HTML")]
    pub html: Option<PathBuf>,
}
