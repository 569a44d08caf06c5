use anyhow::Result;
use fixture::{DeviceCapabilities, planned_app_reference};

use crate::context::CommandContext;

/// Prints the descriptor as JSON. Remote mode shows the storage reference without uploading.
pub fn execute(ctx: &CommandContext) -> Result<()> {
	let app = planned_app_reference(ctx.remote_selected(), &ctx.working_dir, &ctx.config.artifact)?;

	let caps = DeviceCapabilities::build(&ctx.config.platform_params(), &ctx.prefix)?.with_app(app)?;
	println!("{}", serde_json::to_string_pretty(&caps)?);
	Ok(())
}
