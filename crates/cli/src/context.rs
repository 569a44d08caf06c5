//! Shared inputs for fixture commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use fixture::{ExecutionMode, FixtureConfig, JobNamePrefix};

use crate::cli::Cli;

/// Resolved global options. Built once per invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
	pub config: FixtureConfig,
	pub working_dir: PathBuf,
	pub force_remote: bool,
	pub prefix: JobNamePrefix,
}

impl CommandContext {
	pub fn from_cli(cli: &Cli, prefix: JobNamePrefix) -> Result<Self> {
		let config = match &cli.config {
			Some(path) => FixtureConfig::from_file(path)?,
			None => FixtureConfig::default(),
		};
		let working_dir = match &cli.dir {
			Some(dir) => dir.clone(),
			None => std::env::current_dir().context("failed to resolve current directory")?,
		};

		Ok(Self {
			config,
			working_dir,
			force_remote: cli.sauce,
			prefix,
		})
	}

	/// Whether remote mode is selected, without requiring credentials.
	pub fn remote_selected(&self) -> bool {
		self.force_remote || fixture::mode::remote_requested(|var| std::env::var(var).ok())
	}

	/// Full mode resolution; remote mode fails without credentials.
	pub fn mode(&self) -> Result<ExecutionMode> {
		Ok(ExecutionMode::from_env(self.force_remote, self.working_dir.clone())?)
	}
}
