//! TestWorld pattern for declarative CLI test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `framegen` binary.
///
/// # Example
/// ```no_run
/// use framegen_testing::{StubServer, TestWorld};
///
/// let server = StubServer::reference().unwrap();
/// let world = TestWorld::new().with_api_url(server.url());
///
/// let result = world.run(&["types"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    output_dir: PathBuf,
    config_path: PathBuf,
    api_url: Option<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().join("exports");
        let config_path = temp_dir.path().join("config.toml");

        std::fs::create_dir_all(&output_dir).expect("Failed to create output dir");

        Self {
            temp_dir,
            output_dir,
            config_path,
            api_url: None,
            env_vars: HashMap::new(),
        }
    }

    /// Directory the CLI writes downloads into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Write a config file that the CLI will pick up through `FRAMEGEN_CONFIG`.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("FRAMEGEN_CONFIG", &self.config_path)
            .env_remove("FRAMEGEN_API_URL")
            .env_remove("RUST_LOG")
            .arg("--output-dir")
            .arg(&self.output_dir);

        if let Some(url) = &self.api_url {
            cmd.arg("--api-url").arg(url);
        }

        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `framegen` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("framegen")
            .map_err(|e| anyhow::anyhow!("Failed to find framegen binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Files currently present in the output directory, sorted by name.
    pub fn exported_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.output_dir)? {
            names.push(entry?.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }

    pub fn read_export(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.output_dir.join(name))?)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
