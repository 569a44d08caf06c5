//! WebDriver-backed session factory.
//!
//! Commands go through fantoccini over a rustls connector. Release is sent
//! with reqwest instead of `Client::close`, which drops the hub's userinfo on
//! the delete request and ignores the response status.

use std::time::Duration;

use appium_fixture_protocol::{Capabilities, SessionId};
use async_trait::async_trait;
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder};
use tracing::debug;

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::mode::Credentials;
use crate::session::{AutomationSession, Endpoint, SessionFactory};

/// Opens Appium sessions through a WebDriver client.
#[derive(Debug, Clone)]
pub struct WebDriverFactory {
	implicit_wait: Duration,
	session_timeout: Duration,
	http: reqwest::Client,
}

impl WebDriverFactory {
	/// `release_timeout` bounds the delete-session request.
	pub fn new(implicit_wait: Duration, session_timeout: Duration, release_timeout: Duration) -> Result<Self> {
		let http = reqwest::Client::builder()
			.timeout(release_timeout)
			.build()
			.map_err(|e| FixtureError::Config(format!("failed to create HTTP client: {e}")))?;
		Ok(Self {
			implicit_wait,
			session_timeout,
			http,
		})
	}

	pub fn from_config(config: &FixtureConfig) -> Result<Self> {
		Self::new(config.implicit_wait(), config.session_timeout(), config.http_timeout())
	}
}

#[async_trait]
impl SessionFactory for WebDriverFactory {
	type Session = WebDriverSession;

	async fn create_session(&self, endpoint: &Endpoint, capabilities: &Capabilities) -> Result<WebDriverSession> {
		let creation_error = |message: String| FixtureError::SessionCreation {
			endpoint: endpoint.to_string(),
			message,
		};

		debug!(target = "fixture.session", %endpoint, job = %capabilities.job_name, "creating session");

		let connector = hyper_rustls::HttpsConnectorBuilder::new()
			.with_webpki_roots()
			.https_or_http()
			.enable_http1()
			.build();
		let base = endpoint.webdriver_base();
		let mut builder = ClientBuilder::new(connector);
		builder.capabilities(capabilities.to_map());
		let client = tokio::time::timeout(self.session_timeout, builder.connect(&base))
			.await
			.map_err(|_| creation_error(format!("no session within {}s", self.session_timeout.as_secs())))?
			.map_err(|e| creation_error(e.to_string()))?;

		let id = match client.session_id().await {
			Ok(Some(raw)) => SessionId::new(raw),
			Ok(None) => None,
			Err(e) => return Err(creation_error(format!("failed to read session id: {e}"))),
		};
		let Some(id) = id else {
			let _ = client.close().await;
			return Err(creation_error("hub returned no session id".into()));
		};

		let release = Release {
			http: self.http.clone(),
			url: endpoint.session_url(&id),
			credentials: endpoint.credentials().cloned(),
		};
		let mut session = WebDriverSession { client, id, release };

		let timeouts = TimeoutConfiguration::new(None, None, Some(self.implicit_wait));
		if let Err(e) = session.client.update_timeouts(timeouts).await {
			if let Err(release) = session.quit().await {
				debug!(target = "fixture.session", error = %release, "release after failed setup");
			}
			return Err(creation_error(format!("failed to set implicit wait: {e}")));
		}

		debug!(target = "fixture.session", session_id = %session.id, "session created");
		Ok(session)
	}
}

/// Authenticated delete-session request for one session.
#[derive(Debug, Clone)]
struct Release {
	http: reqwest::Client,
	url: String,
	credentials: Option<Credentials>,
}

impl Release {
	async fn send(&self, id: &SessionId) -> Result<()> {
		let teardown_error = |message: String| FixtureError::Teardown {
			session_id: id.to_string(),
			message,
		};

		let mut request = self.http.delete(&self.url);
		if let Some(credentials) = &self.credentials {
			request = request.basic_auth(credentials.username(), Some(credentials.access_key()));
		}
		let response = request
			.send()
			.await
			.map_err(|e| teardown_error(e.without_url().to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(teardown_error(format!("hub answered {status}")));
		}
		Ok(())
	}
}

/// Live WebDriver session.
pub struct WebDriverSession {
	client: Client,
	id: SessionId,
	release: Release,
}

impl WebDriverSession {
	/// Client handle for element lookups. Valid until the session is released.
	pub fn client(&self) -> &Client {
		&self.client
	}
}

#[async_trait]
impl AutomationSession for WebDriverSession {
	fn id(&self) -> &SessionId {
		&self.id
	}

	async fn quit(&mut self) -> Result<()> {
		self.release.send(&self.id).await?;
		// Released above; dropping the last client handle must not send a second delete.
		if let Err(e) = self.client.persist().await {
			debug!(target = "fixture.session", session_id = %self.id, error = %e, "client already shut down");
		}
		Ok(())
	}
}
