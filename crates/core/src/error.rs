//! Error types for session bootstrap and teardown.

use thiserror::Error;

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while preparing, using, or releasing a session.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// Publishing the build artifact to cloud storage failed. Fatal for setup.
	#[error("artifact upload failed for {artifact}: {message}")]
	Upload { artifact: String, message: String },

	/// The hub rejected the capabilities or could not be reached. Fatal for setup.
	#[error("session creation failed at {endpoint}: {message}")]
	SessionCreation {
		/// Endpoint with credentials redacted.
		endpoint: String,
		message: String,
	},

	/// Releasing a session failed. Logged by the lifecycle, never propagated out of teardown.
	#[error("session release failed for {session_id}: {message}")]
	Teardown { session_id: String, message: String },

	#[error("invalid capabilities: `{key}` is missing or empty")]
	InvalidCapabilities { key: &'static str },

	#[error("remote mode requires credentials: {0} is not set")]
	MissingCredentials(&'static str),

	#[error("invalid lifecycle state: {0}")]
	InvalidState(String),

	#[error("configuration error: {0}")]
	Config(String),

	#[error("job status update failed for {session_id}: {message}")]
	Report { session_id: String, message: String },

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Wait { ms: u64, condition: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}
