//! Explicit element waits bound to the active session.

use std::time::Duration;

use fantoccini::Locator;
use fantoccini::elements::Element;
use tracing::debug;

use crate::error::{FixtureError, Result};
use crate::webdriver::WebDriverSession;

/// Helper the lifecycle binds to a freshly created session.
pub trait WaitHelper<S>: Send {
	/// Binds to `session`. Called once per successful setup, after the id is recorded.
	fn init(&mut self, session: &S);

	/// Drops the binding at teardown so no handle outlives the session.
	fn detach(&mut self) {}
}

/// Polls for elements on a [`WebDriverSession`] up to a fixed timeout.
#[derive(Clone)]
pub struct ElementWaiter {
	client: Option<fantoccini::Client>,
	timeout: Duration,
}

impl ElementWaiter {
	pub fn new(timeout: Duration) -> Self {
		Self { client: None, timeout }
	}

	pub fn is_bound(&self) -> bool {
		self.client.is_some()
	}

	/// Waits until `locator` matches an element.
	pub async fn wait(&self, locator: Locator<'_>) -> Result<Element> {
		let client = self
			.client
			.as_ref()
			.ok_or_else(|| FixtureError::InvalidState("wait helper used without an open session".into()))?;

		let condition = format!("{locator:?}");
		let ms = self.timeout.as_millis() as u64;
		debug!(target = "fixture.wait", %condition, timeout_ms = ms, "waiting for element");
		client
			.wait()
			.at_most(self.timeout)
			.for_element(locator)
			.await
			.map_err(|e| FixtureError::Wait {
				ms,
				condition: format!("{condition} ({e})"),
			})
	}

	/// Shorthand for a CSS selector wait.
	pub async fn wait_css(&self, selector: &str) -> Result<Element> {
		self.wait(Locator::Css(selector)).await
	}
}

impl WaitHelper<WebDriverSession> for ElementWaiter {
	fn init(&mut self, session: &WebDriverSession) {
		self.client = Some(session.client().clone());
	}

	fn detach(&mut self) {
		self.client = None;
	}
}
