//! Local simulator vs. cloud grid selection.

use std::fmt;
use std::path::PathBuf;

use crate::error::{FixtureError, Result};

/// Presence of this variable selects remote mode.
pub const REMOTE_SWITCH_VAR: &str = "SAUCE";
pub const USERNAME_VAR: &str = "SAUCE_USER_NAME";
pub const ACCESS_KEY_VAR: &str = "SAUCE_API_KEY";

/// Cloud grid credentials. `Debug` never prints the access key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	username: String,
	access_key: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			access_key: access_key.into(),
		}
	}

	/// Reads credentials through `lookup`, treating blank values as unset.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let read = |var: &'static str| {
			lookup(var)
				.filter(|v| !v.trim().is_empty())
				.ok_or(FixtureError::MissingCredentials(var))
		};
		Ok(Self::new(read(USERNAME_VAR)?, read(ACCESS_KEY_VAR)?))
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn access_key(&self) -> &str {
		&self.access_key
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("access_key", &"***")
			.finish()
	}
}

/// Where sessions run for this test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
	/// Local simulator behind a local hub; the artifact is referenced by absolute path.
	Local { working_dir: PathBuf },
	/// Cloud grid; the artifact in `artifact_dir` is uploaded before session creation.
	Remote {
		credentials: Credentials,
		artifact_dir: PathBuf,
	},
}

impl ExecutionMode {
	/// Resolves the mode from the process environment.
	///
	/// `force_remote` ORs with the [`REMOTE_SWITCH_VAR`] switch.
	pub fn from_env(force_remote: bool, working_dir: PathBuf) -> Result<Self> {
		Self::resolve(force_remote, working_dir, |var| std::env::var(var).ok())
	}

	/// Resolves the mode through an injectable variable lookup.
	pub fn resolve(force_remote: bool, working_dir: PathBuf, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		if force_remote || remote_requested(&lookup) {
			Ok(ExecutionMode::Remote {
				credentials: Credentials::from_lookup(lookup)?,
				artifact_dir: working_dir,
			})
		} else {
			Ok(ExecutionMode::Local { working_dir })
		}
	}

	pub fn is_remote(&self) -> bool {
		matches!(self, ExecutionMode::Remote { .. })
	}

	pub fn credentials(&self) -> Option<&Credentials> {
		match self {
			ExecutionMode::Local { .. } => None,
			ExecutionMode::Remote { credentials, .. } => Some(credentials),
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			ExecutionMode::Local { .. } => "local",
			ExecutionMode::Remote { .. } => "remote",
		}
	}
}

/// True when the remote switch variable is present with any value.
pub fn remote_requested(lookup: impl Fn(&str) -> Option<String>) -> bool {
	lookup(REMOTE_SWITCH_VAR).is_some()
}
