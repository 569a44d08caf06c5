use chrono::{DateTime, Utc};

/// Run timestamp embedded in every job name so one run's sessions group together.
///
/// Capture once at process start and pass it to every lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobNamePrefix(DateTime<Utc>);

impl JobNamePrefix {
	pub fn capture() -> Self {
		Self(Utc::now())
	}

	pub fn at(timestamp: DateTime<Utc>) -> Self {
		Self(timestamp)
	}

	/// `"<base> Tue Jun 02 14:03:11 UTC 2015"`
	pub fn job_name(&self, base: &str) -> String {
		format!("{base} {}", self.0.format("%a %b %d %H:%M:%S UTC %Y"))
	}
}
