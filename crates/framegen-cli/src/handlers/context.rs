use anyhow::{Context, Result};
use framegen_client::{ApiClient, Config};
use framegen_engine::Controller;
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;
use crate::presentation::ConsoleRenderer;

pub struct ExecutionContext {
    config: Config,
    format: OutputFormat,
    output_dir: PathBuf,
}

impl ExecutionContext {
    pub fn new(config: Config, format: OutputFormat, output_dir: PathBuf) -> Self {
        Self {
            config,
            format,
            output_dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// A fresh page session against the configured API.
    pub fn controller(&self) -> Result<Controller> {
        let api = ApiClient::from_config(&self.config.api)
            .with_context(|| format!("Failed to create API client for {}", self.config.api.base_url))?;
        Ok(Controller::new(api, self.config.ui.clone()))
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format.into())
    }
}
