//! Per-test session lifecycle.
//!
//! A [`SessionLifecycle`] owns at most one session for one test:
//!
//! ```text
//! Uninitialized -> CapabilitiesBuilt -> SessionOpen -> TornDown
//!        \                 \
//!         +-----------------+--> Failed -> TornDown
//! ```
//!
//! Setup is fail-fast: an upload or session creation error leaves no session
//! behind and skips wait-helper binding. Teardown never assumes setup got
//! anywhere, and never returns an error.

use appium_fixture_protocol::{Capabilities, SessionId};
use tracing::{debug, info, warn};

use crate::capabilities::{DeviceCapabilities, local_app_reference};
use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::job::JobNamePrefix;
use crate::mode::ExecutionMode;
use crate::report::SessionIdProvider;
use crate::session::{AutomationSession, Endpoint, SessionFactory};
use crate::upload::ArtifactUploader;
use crate::wait::WaitHelper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
	Uninitialized,
	CapabilitiesBuilt,
	SessionOpen,
	/// Setup aborted; no session exists.
	Failed,
	TornDown,
}

/// Owns one test's session from setup to teardown.
pub struct SessionLifecycle<F: SessionFactory, U, W> {
	mode: ExecutionMode,
	config: FixtureConfig,
	prefix: JobNamePrefix,
	factory: F,
	uploader: U,
	waiter: W,
	state: LifecycleState,
	capabilities: Option<Capabilities>,
	session: Option<F::Session>,
	session_id: Option<SessionId>,
}

impl<F, U, W> SessionLifecycle<F, U, W>
where
	F: SessionFactory,
	U: ArtifactUploader,
	W: WaitHelper<F::Session>,
{
	pub fn new(mode: ExecutionMode, config: FixtureConfig, prefix: JobNamePrefix, factory: F, uploader: U, waiter: W) -> Self {
		Self {
			mode,
			config,
			prefix,
			factory,
			uploader,
			waiter,
			state: LifecycleState::Uninitialized,
			capabilities: None,
			session: None,
			session_id: None,
		}
	}

	/// Prepares a fully configured session, or fails without leaving one behind.
	pub async fn setup(&mut self) -> Result<()> {
		if self.state != LifecycleState::Uninitialized {
			return Err(FixtureError::InvalidState(format!(
				"setup requires an uninitialized lifecycle, found {:?}",
				self.state
			)));
		}

		match self.open().await {
			Ok(()) => Ok(()),
			Err(err) => {
				warn!(target = "fixture.session", mode = self.mode.label(), error = %err, "setup failed");
				self.state = LifecycleState::Failed;
				Err(err)
			}
		}
	}

	async fn open(&mut self) -> Result<()> {
		let device = DeviceCapabilities::build(&self.config.platform_params(), &self.prefix)?;
		self.state = LifecycleState::CapabilitiesBuilt;

		let artifact = self.config.artifact.as_str();
		let app = match &self.mode {
			ExecutionMode::Local { working_dir } => local_app_reference(working_dir, artifact)?,
			ExecutionMode::Remote {
				credentials,
				artifact_dir,
			} => self.uploader.upload(artifact_dir, artifact, credentials).await?,
		};
		let capabilities = device.with_app(app)?;
		let endpoint = Endpoint::for_mode(&self.mode, &self.config)?;

		debug!(
			target = "fixture.session",
			mode = self.mode.label(),
			%endpoint,
			app = %capabilities.app,
			"opening session"
		);
		let session = self.factory.create_session(&endpoint, &capabilities).await?;

		let id = session.id().clone();
		info!(target = "fixture.session", session_id = %id, job = %capabilities.job_name, "session open");
		self.session_id = Some(id);
		self.waiter.init(&session);
		self.capabilities = Some(capabilities);
		self.session = Some(session);
		self.state = LifecycleState::SessionOpen;
		Ok(())
	}

	/// Releases the session if one was created. Safe to call in any state, any number of times.
	///
	/// Release failures are logged at `warn` and swallowed so they never mask the test result.
	pub async fn teardown(&mut self) {
		self.waiter.detach();

		match self.session.take() {
			Some(mut session) => {
				if let Err(err) = session.quit().await {
					warn!(target = "fixture.session", session_id = %session.id(), error = %err, "session release failed");
				} else {
					debug!(target = "fixture.session", session_id = %session.id(), "session released");
				}
			}
			None if self.state == LifecycleState::TornDown => {
				debug!(target = "fixture.session", "teardown repeated; nothing to release");
			}
			None => {
				debug!(target = "fixture.session", state = ?self.state, "teardown without a session");
			}
		}

		self.state = LifecycleState::TornDown;
	}

	pub fn state(&self) -> LifecycleState {
		self.state
	}

	pub fn mode(&self) -> &ExecutionMode {
		&self.mode
	}

	/// Descriptor sent on the last successful setup.
	pub fn capabilities(&self) -> Option<&Capabilities> {
		self.capabilities.as_ref()
	}

	/// The open session, for the test body.
	pub fn session(&self) -> Option<&F::Session> {
		self.session.as_ref()
	}

	/// Id of the created session regardless of mode. Survives teardown.
	pub fn created_session_id(&self) -> Option<&SessionId> {
		self.session_id.as_ref()
	}

	pub fn waiter(&self) -> &W {
		&self.waiter
	}
}

impl<F: SessionFactory, U, W> SessionIdProvider for SessionLifecycle<F, U, W> {
	/// Only remote jobs are attributable; local runs always yield `None`.
	fn session_id(&self) -> Option<&SessionId> {
		if self.mode.is_remote() { self.session_id.as_ref() } else { None }
	}
}
