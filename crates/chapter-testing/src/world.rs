//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated content directory and config file
//! - Writing content documents into it
//! - Executing CLI commands with a pinned reference date

use anyhow::Result;
use assert_cmd::Command;
use chapter_types::Resource;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use chapter_testing::TestWorld;
/// use chapter_testing::fixtures;
///
/// let world = TestWorld::new()
///     .with_resource(chapter_types::Resource::Events, fixtures::sample_events())
///     .with_today(fixtures::REFERENCE_DATE);
///
/// let result = world.run(&["events"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    content_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    today: Option<String>,
    pass_content_dir: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty `content/` dir.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let content_dir = base_path.join("content");
        let config_path = base_path.join("config.toml");

        std::fs::create_dir_all(&content_dir).expect("Failed to create content dir");

        Self {
            cwd: base_path,
            temp_dir,
            content_dir,
            config_path,
            env_vars: HashMap::new(),
            today: None,
            pass_content_dir: true,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `value` as `<resource>.json` in the content dir.
    pub fn with_resource(self, resource: Resource, value: Value) -> Self {
        let body = serde_json::to_string_pretty(&value).expect("Failed to serialize fixture");
        self.with_raw_file(&resource.file_name(), &body)
    }

    /// Write an arbitrary file in the content dir, e.g. malformed JSON.
    pub fn with_raw_file(self, file_name: &str, contents: &str) -> Self {
        std::fs::write(self.content_dir.join(file_name), contents)
            .expect("Failed to write content file");
        self
    }

    /// Populate every resource with the standard fixtures.
    pub fn with_sample_content(self) -> Self {
        self.with_resource(Resource::Events, fixtures::sample_events())
            .with_resource(Resource::Activities, fixtures::sample_activities())
            .with_resource(Resource::Team, fixtures::sample_team())
            .with_resource(Resource::Faq, fixtures::sample_faq())
            .with_resource(Resource::Site, fixtures::sample_site())
            .with_resource(Resource::Settings, fixtures::sample_settings())
            .with_resource(Resource::Social, fixtures::sample_social())
    }

    /// Pin the reference date passed as `--today`.
    pub fn with_today(mut self, date: impl Into<String>) -> Self {
        self.today = Some(date.into());
        self
    }

    /// Write `config.toml`; the CLI finds it through `CHAPTER_CONFIG`.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Stop passing `--content-dir`, leaving resolution to env, config and cwd.
    pub fn without_content_flag(mut self) -> Self {
        self.pass_content_dir = false;
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if self.pass_content_dir {
            cmd.arg("--content-dir").arg(&self.content_dir);
        }

        if let Some(today) = &self.today {
            cmd.arg("--today").arg(today);
        }

        cmd.current_dir(&self.cwd);

        // Keep the developer's own environment out of the run
        cmd.env("CHAPTER_CONFIG", &self.config_path);
        cmd.env_remove("CHAPTER_CONTENT");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `chapter` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("chapter")
            .map_err(|e| anyhow::anyhow!("Failed to find chapter binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
