use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::context::ExecutionContext;
use super::logging;
use anyhow::{Context, Result};
use framegen_client::Config;
use framegen_client::config::expand_tilde;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_api_url_override(cli.api_url.as_deref());
    tracing::debug!(api = %config.api.base_url, "configuration resolved");

    let ctx = ExecutionContext::new(config, cli.format, expand_tilde(&cli.output_dir));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        match cli.command {
            Commands::Types => handlers::types::handle(&ctx).await,
            Commands::Examples { show } => handlers::examples::handle(&ctx, show).await,
            Commands::Generate(args) => handlers::generate::handle(&ctx, args).await,
        }
    })
}
