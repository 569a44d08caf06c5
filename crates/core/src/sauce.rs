//! Cloud storage and job status REST client.

use std::path::Path;
use std::time::Duration;

use appium_fixture_protocol::{ArtifactRef, JobStatus, SessionId};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::mode::Credentials;
use crate::report::JobReporter;
use crate::upload::ArtifactUploader;

/// Public dashboard page for a job.
pub fn job_url(session_id: &SessionId) -> String {
	format!("https://saucelabs.com/tests/{session_id}")
}

/// REST client for artifact storage and job status updates.
#[derive(Debug, Clone)]
pub struct SauceRest {
	client: reqwest::Client,
	base_url: String,
}

impl SauceRest {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| FixtureError::Config(format!("failed to create HTTP client: {e}")))?;
		Ok(Self {
			client,
			base_url: base_url.trim_end_matches('/').to_string(),
		})
	}

	pub fn from_config(config: &FixtureConfig) -> Result<Self> {
		Self::new(&config.storage_base_url, config.http_timeout())
	}

	fn storage_url(&self, username: &str, file_name: &str) -> String {
		format!("{}/rest/v1/storage/{username}/{file_name}?overwrite=true", self.base_url)
	}

	fn job_url(&self, username: &str, session_id: &SessionId) -> String {
		format!("{}/rest/v1/{username}/jobs/{session_id}", self.base_url)
	}
}

#[async_trait]
impl ArtifactUploader for SauceRest {
	async fn upload(&self, local_dir: &Path, file_name: &str, credentials: &Credentials) -> Result<ArtifactRef> {
		let upload_error = |message: String| FixtureError::Upload {
			artifact: file_name.to_string(),
			message,
		};

		let path = local_dir.join(file_name);
		let body = tokio::fs::read(&path)
			.await
			.map_err(|e| upload_error(format!("failed to read {}: {e}", path.display())))?;

		debug!(target = "fixture.sauce", artifact = file_name, bytes = body.len(), "uploading artifact");
		let response = self
			.client
			.post(self.storage_url(credentials.username(), file_name))
			.basic_auth(credentials.username(), Some(credentials.access_key()))
			.header(CONTENT_TYPE, "application/octet-stream")
			.body(body)
			.send()
			.await
			.map_err(|e| upload_error(e.without_url().to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(upload_error(format!("storage service returned {status}")));
		}

		info!(target = "fixture.sauce", artifact = file_name, "artifact uploaded");
		Ok(ArtifactRef::storage(file_name))
	}
}

#[async_trait]
impl JobReporter for SauceRest {
	async fn report(&self, credentials: &Credentials, session_id: &SessionId, passed: bool) -> Result<()> {
		let report_error = |message: String| FixtureError::Report {
			session_id: session_id.to_string(),
			message,
		};

		let response = self
			.client
			.put(self.job_url(credentials.username(), session_id))
			.basic_auth(credentials.username(), Some(credentials.access_key()))
			.json(&JobStatus { passed })
			.send()
			.await
			.map_err(|e| report_error(e.without_url().to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(report_error(format!("job service returned {status}")));
		}

		debug!(target = "fixture.sauce", %session_id, passed, "job status updated");
		Ok(())
	}
}
