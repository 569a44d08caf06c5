use anyhow::Result;
use fixture::Endpoint;

use crate::context::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
	let mode = ctx.mode()?;
	let endpoint = Endpoint::for_mode(&mode, &ctx.config)?;
	println!("{endpoint}");
	Ok(())
}
