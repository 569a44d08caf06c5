use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Filter used when `RUST_LOG` is unset.
///
/// The quiet level stays at `warn` rather than `error`: teardown swallows
/// release failures and rejected job reports, and a warning on stderr is the
/// only trace they leave.
fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		// session milestones, client crates stay quiet
		1 => "info,fantoccini=warn,hyper=warn,reqwest=warn",
		_ => "debug",
	}
}

pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

	// stdout carries command output only
	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
