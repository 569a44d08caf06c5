//! Capability descriptor assembly.
//!
//! Building happens in two steps that mirror setup: [`DeviceCapabilities::build`]
//! validates the fixed platform parameters and stamps the job name, then
//! [`DeviceCapabilities::with_app`] injects the mode-specific application
//! reference and yields the wire-level [`Capabilities`]. Neither step does I/O
//! except [`local_app_reference`], which only resolves a path.

use std::path::Path;

use appium_fixture_protocol::{ArtifactRef, Capabilities, keys};

use crate::config::PlatformParams;
use crate::error::{FixtureError, Result};
use crate::job::JobNamePrefix;

/// Capabilities with every field except `app` populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCapabilities {
	appium_version: String,
	platform_version: String,
	platform_name: String,
	device_name: String,
	job_name: String,
}

impl DeviceCapabilities {
	pub fn build(params: &PlatformParams, prefix: &JobNamePrefix) -> Result<Self> {
		let required = |key: &'static str, value: &str| {
			if value.trim().is_empty() {
				Err(FixtureError::InvalidCapabilities { key })
			} else {
				Ok(value.to_string())
			}
		};

		Ok(Self {
			appium_version: required(keys::APPIUM_VERSION, &params.appium_version)?,
			platform_version: required(keys::PLATFORM_VERSION, &params.platform_version)?,
			platform_name: required(keys::PLATFORM_NAME, &params.platform_name)?,
			device_name: required(keys::DEVICE_NAME, &params.device_name)?,
			job_name: required(keys::JOB_NAME, &params.job_name).map(|base| prefix.job_name(&base))?,
		})
	}

	/// Completes the descriptor. Fails if any field would be sent empty.
	pub fn with_app(self, app: ArtifactRef) -> Result<Capabilities> {
		let caps = Capabilities {
			appium_version: self.appium_version,
			platform_version: self.platform_version,
			platform_name: self.platform_name,
			device_name: self.device_name,
			job_name: self.job_name,
			app: app.into_string(),
		};
		match caps.first_empty() {
			Some(key) => Err(FixtureError::InvalidCapabilities { key }),
			None => Ok(caps),
		}
	}
}

/// Absolute path of `<working_dir>/<artifact>` as an `app` reference.
///
/// The artifact is not required to exist; the hub reports a missing file.
pub fn local_app_reference(working_dir: &Path, artifact: &str) -> Result<ArtifactRef> {
	let path = std::path::absolute(working_dir.join(artifact))?;
	Ok(ArtifactRef::local(path.to_string_lossy().into_owned()))
}

/// `app` reference setup will use, without uploading anything.
///
/// Remote runs reference the storage name the upload will produce, so no
/// credentials are needed to preview them.
pub fn planned_app_reference(remote: bool, working_dir: &Path, artifact: &str) -> Result<ArtifactRef> {
	if remote {
		Ok(ArtifactRef::storage(artifact))
	} else {
		local_app_reference(working_dir, artifact)
	}
}
