use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::styles::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "fixture")]
#[command(about = "Bootstrap and tear down Appium sessions on a local hub or a cloud grid")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// JSON config file; missing keys use built-in defaults
	#[arg(short, long, global = true, value_name = "FILE", env = "FIXTURE_CONFIG")]
	pub config: Option<PathBuf>,

	/// Directory containing the app artifact (defaults to the current directory)
	#[arg(long, global = true, value_name = "DIR")]
	pub dir: Option<PathBuf>,

	/// Run on the cloud grid (also enabled when SAUCE is set)
	#[arg(long, global = true)]
	pub sauce: bool,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Print the capability descriptor setup would send
	Caps,

	/// Print the hub endpoint with credentials redacted
	Endpoint,

	/// Run setup, an optional element wait, job reporting, and teardown
	Smoke(SmokeArgs),
}

#[derive(Args, Debug)]
pub struct SmokeArgs {
	/// Test name printed before the job link
	#[arg(short, long, default_value = "smoke")]
	pub name: String,

	/// CSS selector that must appear before the test passes
	#[arg(long, value_name = "SELECTOR")]
	pub wait_for: Option<String>,
}

#[cfg(test)]
mod tests;
