//! Session factory seam and hub endpoints.

use std::fmt;

use appium_fixture_protocol::{Capabilities, SessionId};
use async_trait::async_trait;

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::mode::{Credentials, ExecutionMode};

/// Hub address a session is created against.
///
/// Remote endpoints embed credentials; [`fmt::Display`] redacts the access key,
/// [`Endpoint::as_str`] returns the full URL for the client only.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
	url: String,
	redacted: String,
	/// Hub URL without userinfo.
	base: String,
	credentials: Option<Credentials>,
}

impl Endpoint {
	/// Well-known local hub address, no credentials.
	pub fn local(url: &str) -> Result<Self> {
		url::Url::parse(url).map_err(|e| FixtureError::Config(format!("invalid local endpoint {url:?}: {e}")))?;
		Ok(Self {
			url: url.to_string(),
			redacted: url.to_string(),
			base: url.to_string(),
			credentials: None,
		})
	}

	/// `http://<username>:<accessKey>@<host>:<port>/wd/hub`, userinfo percent-encoded.
	pub fn remote(credentials: &Credentials, host: &str, port: u16) -> Result<Self> {
		let invalid = |message: String| FixtureError::Config(format!("invalid cloud endpoint for host {host:?}: {message}"));
		let base = format!("http://{host}:{port}/wd/hub");

		let mut parsed = url::Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
		parsed
			.set_username(credentials.username())
			.map_err(|()| invalid("cannot carry a username".into()))?;
		parsed
			.set_password(Some(credentials.access_key()))
			.map_err(|()| invalid("cannot carry an access key".into()))?;

		// `Url` drops the default port on serialization, so the authority is
		// reassembled from its encoded parts.
		let username = parsed.username();
		let access_key = parsed.password().unwrap_or_default();
		Ok(Self {
			url: format!("http://{username}:{access_key}@{host}:{port}/wd/hub"),
			redacted: format!("http://{username}:***@{host}:{port}/wd/hub"),
			base,
			credentials: Some(credentials.clone()),
		})
	}

	/// Endpoint setup connects to for `mode`.
	pub fn for_mode(mode: &ExecutionMode, config: &FixtureConfig) -> Result<Self> {
		match mode {
			ExecutionMode::Local { .. } => Self::local(&config.local_endpoint),
			ExecutionMode::Remote { credentials, .. } => Self::remote(credentials, &config.cloud_host, config.cloud_port),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.url
	}

	/// Credentials the hub expects on every request, if any.
	pub fn credentials(&self) -> Option<&Credentials> {
		self.credentials.as_ref()
	}

	/// Full URL with a trailing slash so relative command paths join below `/wd/hub`.
	pub fn webdriver_base(&self) -> String {
		if self.url.ends_with('/') {
			self.url.clone()
		} else {
			format!("{}/", self.url)
		}
	}

	/// Delete-session URL for `id`, without userinfo.
	pub fn session_url(&self, id: &SessionId) -> String {
		format!("{}/session/{id}", self.base.trim_end_matches('/'))
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.redacted)
	}
}

impl fmt::Debug for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Endpoint").field(&self.redacted).finish()
	}
}

/// One live remote automation session.
#[async_trait]
pub trait AutomationSession: Send + Sync {
	/// Identifier assigned by the hub at creation time.
	fn id(&self) -> &SessionId;

	/// Releases the remote session. Called at most once by the lifecycle.
	async fn quit(&mut self) -> Result<()>;
}

/// Opens sessions against a hub.
#[async_trait]
pub trait SessionFactory: Send + Sync {
	type Session: AutomationSession;

	/// Creates a session and applies the implicit element wait.
	///
	/// Fails with [`FixtureError::SessionCreation`] when the hub is unreachable
	/// or rejects `capabilities`.
	async fn create_session(&self, endpoint: &Endpoint, capabilities: &Capabilities) -> Result<Self::Session>;
}
