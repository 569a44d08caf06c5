//! Identifier and payload types shared with the hub and the cloud services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme prefix for artifacts published to cloud storage.
pub const STORAGE_SCHEME: &str = "sauce-storage";

/// Identifier assigned by the remote hub to a created session.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
	/// Wraps a hub-provided id; returns `None` for a blank id.
	pub fn new(id: impl Into<String>) -> Option<Self> {
		let id = id.into();
		if id.trim().is_empty() { None } else { Some(Self(id)) }
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SessionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Value of the `app` capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
	/// Reference to an artifact already present in cloud storage.
	pub fn storage(file_name: &str) -> Self {
		Self(format!("{STORAGE_SCHEME}:{file_name}"))
	}

	/// Reference to an artifact on the local filesystem.
	pub fn local(absolute_path: impl Into<String>) -> Self {
		Self(absolute_path.into())
	}

	pub fn is_storage(&self) -> bool {
		self.0
			.strip_prefix(STORAGE_SCHEME)
			.is_some_and(|rest| rest.starts_with(':'))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for ArtifactRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Body of a job status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
	pub passed: bool,
}
