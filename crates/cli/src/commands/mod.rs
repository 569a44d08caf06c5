mod caps;
mod endpoint;
mod smoke;

use anyhow::Result;
use fixture::JobNamePrefix;

use crate::cli::{Cli, Commands};
use crate::context::CommandContext;

pub async fn dispatch(cli: Cli) -> Result<()> {
	// One timestamp per invocation groups every job this run creates.
	let prefix = JobNamePrefix::capture();
	let ctx = CommandContext::from_cli(&cli, prefix)?;

	match cli.command {
		Commands::Caps => caps::execute(&ctx),
		Commands::Endpoint => endpoint::execute(&ctx),
		Commands::Smoke(args) => smoke::execute(&ctx, args).await,
	}
}
