//! Wire types for Appium session bootstrap.
//!
//! This crate contains the serde-serializable shapes exchanged with a remote
//! automation hub and the cloud storage/job services:
//!
//! - [`Capabilities`] - the desired-capability set sent on session creation
//! - [`SessionId`] - identifier assigned by the hub to a created session
//! - [`ArtifactRef`] - the `app` value, either a local path or a storage reference
//! - [`JobStatus`] - pass/fail body for job status updates
//!
//! Types here are pure data. Building, validating, and sending them happens in
//! `appium-fixture`.

pub mod capabilities;
pub mod types;

pub use capabilities::*;
pub use types::*;
