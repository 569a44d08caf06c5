//! Per-test Appium session bootstrap and teardown.
//!
//! Decides between a local simulator hub and a cloud device grid, builds the
//! capability descriptor (uploading the app artifact when remote), opens the
//! session, exposes its id for job attribution, and guarantees release.
//!
//! # Example
//!
//! ```ignore
//! use fixture::{
//!     ElementWaiter, ExecutionMode, FixtureConfig, JobNamePrefix, SauceRest, SessionLifecycle, WebDriverFactory,
//! };
//!
//! let prefix = JobNamePrefix::capture();
//! let config = FixtureConfig::default();
//! let mode = ExecutionMode::from_env(false, std::env::current_dir()?)?;
//! let mut lifecycle = SessionLifecycle::new(
//!     mode,
//!     config.clone(),
//!     prefix,
//!     WebDriverFactory::from_config(&config)?,
//!     SauceRest::from_config(&config)?,
//!     ElementWaiter::new(config.element_wait()),
//! );
//!
//! lifecycle.setup().await?;
//! lifecycle.waiter().wait_css("#home").await?;
//! lifecycle.teardown().await;
//! ```

pub mod capabilities;
pub mod config;
pub mod error;
pub mod job;
pub mod lifecycle;
pub mod mode;
pub mod report;
pub mod sauce;
pub mod session;
pub mod upload;
pub mod wait;
pub mod webdriver;

pub use appium_fixture_protocol::{ArtifactRef, Capabilities, SessionId};
pub use capabilities::{DeviceCapabilities, local_app_reference, planned_app_reference};
pub use config::{FixtureConfig, PlatformParams};
pub use error::{FixtureError, Result};
pub use job::JobNamePrefix;
pub use lifecycle::{LifecycleState, SessionLifecycle};
pub use mode::{Credentials, ExecutionMode};
pub use report::{JobReporter, SessionIdProvider, TestWatcher, report_outcome};
pub use sauce::{SauceRest, job_url};
pub use session::{AutomationSession, Endpoint, SessionFactory};
pub use upload::ArtifactUploader;
pub use wait::{ElementWaiter, WaitHelper};
pub use webdriver::{WebDriverFactory, WebDriverSession};
