use std::path::Path;

use appium_fixture_protocol::ArtifactRef;
use async_trait::async_trait;

use crate::error::Result;
use crate::mode::Credentials;

/// Publishes the build artifact to cloud storage. Only invoked in remote mode.
#[async_trait]
pub trait ArtifactUploader: Send + Sync {
	/// Uploads `<local_dir>/<file_name>` and returns the reference to put in `app`.
	///
	/// Fails with [`crate::FixtureError::Upload`] on unreadable files, rejected
	/// credentials, or network errors.
	async fn upload(&self, local_dir: &Path, file_name: &str, credentials: &Credentials) -> Result<ArtifactRef>;
}
