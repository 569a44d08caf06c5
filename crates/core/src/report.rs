//! Correlating test outcomes with cloud jobs.

use std::io::{self, Write};

use appium_fixture_protocol::SessionId;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::Result;
use crate::mode::{Credentials, ExecutionMode};
use crate::sauce::job_url;

/// Source of the session identifier a reporting sink attributes results to.
pub trait SessionIdProvider {
	/// The current session's id, or `None` when attribution is meaningless (local runs).
	fn session_id(&self) -> Option<&SessionId>;
}

/// Records pass/fail for a cloud job.
#[async_trait]
pub trait JobReporter: Send + Sync {
	async fn report(&self, credentials: &Credentials, session_id: &SessionId, passed: bool) -> Result<()>;
}

/// Reports `passed` when `provider` yields an id in remote mode.
///
/// Returns whether a report was delivered. Failures are logged, never raised,
/// so they cannot replace the test's own result.
pub async fn report_outcome<R>(reporter: &R, mode: &ExecutionMode, provider: &impl SessionIdProvider, passed: bool) -> bool
where
	R: JobReporter + ?Sized,
{
	let (Some(credentials), Some(session_id)) = (mode.credentials(), provider.session_id()) else {
		debug!(target = "fixture.report", mode = mode.label(), "no job to attribute; skipping report");
		return false;
	};

	match reporter.report(credentials, session_id, passed).await {
		Ok(()) => true,
		Err(err) => {
			warn!(target = "fixture.report", %session_id, error = %err, "job status update failed");
			false
		}
	}
}

/// Prints test names as they start and the job link when they finish.
pub struct TestWatcher<W: Write> {
	out: W,
}

impl TestWatcher<io::Stdout> {
	pub fn stdout() -> Self {
		Self { out: io::stdout() }
	}
}

impl<W: Write> TestWatcher<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn starting(&mut self, test_name: &str) -> io::Result<()> {
		write!(self.out, "  test: {test_name}")?;
		self.out.flush()
	}

	/// Ends the line started by [`TestWatcher::starting`], appending the job URL when there is one.
	pub fn finished(&mut self, provider: &impl SessionIdProvider) -> io::Result<()> {
		match provider.session_id() {
			Some(id) => writeln!(self.out, " {}", job_url(id)),
			None => writeln!(self.out),
		}
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(Option<SessionId>);

	impl SessionIdProvider for Fixed {
		fn session_id(&self) -> Option<&SessionId> {
			self.0.as_ref()
		}
	}

	#[test]
	fn remote_finish_prints_job_link() {
		let mut watcher = TestWatcher::new(Vec::new());
		watcher.starting("testTextFields").unwrap();
		watcher.finished(&Fixed(SessionId::new("abc123"))).unwrap();
		let out = String::from_utf8(watcher.into_inner()).unwrap();
		assert_eq!(out, "  test: testTextFields https://saucelabs.com/tests/abc123\n");
	}

	#[test]
	fn local_finish_ends_line() {
		let mut watcher = TestWatcher::new(Vec::new());
		watcher.starting("testButtons").unwrap();
		watcher.finished(&Fixed(None)).unwrap();
		let out = String::from_utf8(watcher.into_inner()).unwrap();
		assert_eq!(out, "  test: testButtons\n");
	}
}
