//! Fixture configuration.
//!
//! Every field has a default matching the iOS tutorial app, so an absent or
//! partial config file is valid. Timeouts are expressed in whole seconds.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://127.0.0.1:4723/wd/hub";
pub const DEFAULT_CLOUD_HOST: &str = "ondemand.saucelabs.com";
pub const DEFAULT_STORAGE_BASE_URL: &str = "https://saucelabs.com";

/// Fixed device/platform parameters shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParams {
	pub appium_version: String,
	pub platform_version: String,
	pub platform_name: String,
	pub device_name: String,
	/// Job name base; the run timestamp is appended.
	pub job_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixtureConfig {
	pub appium_version: String,
	pub platform_version: String,
	pub platform_name: String,
	pub device_name: String,
	pub job_name: String,
	/// Artifact file name, resolved against the working directory.
	pub artifact: String,
	pub local_endpoint: String,
	pub cloud_host: String,
	pub cloud_port: u16,
	/// Base URL of the storage and job REST API.
	pub storage_base_url: String,
	/// Implicit wait applied to the session handle.
	pub implicit_wait_secs: u64,
	/// Upper bound for explicit element waits.
	pub element_wait_secs: u64,
	/// Timeout for storage/job HTTP calls and the delete-session request.
	pub http_timeout_secs: u64,
	/// Upper bound for session creation. Cloud simulators can take minutes to boot.
	pub session_timeout_secs: u64,
}

impl Default for FixtureConfig {
	fn default() -> Self {
		Self {
			appium_version: "1.4.1".into(),
			platform_version: "8.3".into(),
			platform_name: "ios".into(),
			device_name: "iPhone Simulator".into(),
			job_name: "Rust iOS tutorial".into(),
			artifact: "UICatalog6.1.app.zip".into(),
			local_endpoint: DEFAULT_LOCAL_ENDPOINT.into(),
			cloud_host: DEFAULT_CLOUD_HOST.into(),
			cloud_port: 80,
			storage_base_url: DEFAULT_STORAGE_BASE_URL.into(),
			implicit_wait_secs: 30,
			element_wait_secs: 30,
			http_timeout_secs: 60,
			session_timeout_secs: 600,
		}
	}
}

impl FixtureConfig {
	/// Loads a JSON config file; missing keys fall back to defaults.
	pub fn from_file(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.map_err(|e| FixtureError::Config(format!("failed to read {}: {e}", path.display())))?;
		let config: Self = serde_json::from_str(&content)
			.map_err(|e| FixtureError::Config(format!("failed to parse {}: {e}", path.display())))?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects values that can never produce a working session.
	pub fn validate(&self) -> Result<()> {
		if self.artifact.trim().is_empty() {
			return Err(FixtureError::Config("artifact must not be empty".into()));
		}
		if self.cloud_host.trim().is_empty() {
			return Err(FixtureError::Config("cloudHost must not be empty".into()));
		}
		url::Url::parse(&self.local_endpoint)
			.map_err(|e| FixtureError::Config(format!("invalid localEndpoint {:?}: {e}", self.local_endpoint)))?;
		url::Url::parse(&self.storage_base_url)
			.map_err(|e| FixtureError::Config(format!("invalid storageBaseUrl {:?}: {e}", self.storage_base_url)))?;
		if self.http_timeout_secs == 0 {
			return Err(FixtureError::Config("httpTimeoutSecs must be positive".into()));
		}
		if self.session_timeout_secs == 0 {
			return Err(FixtureError::Config("sessionTimeoutSecs must be positive".into()));
		}
		Ok(())
	}

	pub fn platform_params(&self) -> PlatformParams {
		PlatformParams {
			appium_version: self.appium_version.clone(),
			platform_version: self.platform_version.clone(),
			platform_name: self.platform_name.clone(),
			device_name: self.device_name.clone(),
			job_name: self.job_name.clone(),
		}
	}

	pub fn implicit_wait(&self) -> Duration {
		Duration::from_secs(self.implicit_wait_secs)
	}

	pub fn element_wait(&self) -> Duration {
		Duration::from_secs(self.element_wait_secs)
	}

	pub fn http_timeout(&self) -> Duration {
		Duration::from_secs(self.http_timeout_secs)
	}

	pub fn session_timeout(&self) -> Duration {
		Duration::from_secs(self.session_timeout_secs)
	}
}
