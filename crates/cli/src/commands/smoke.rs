use anyhow::Result;
use colored::Colorize;
use fixture::{ElementWaiter, SauceRest, SessionLifecycle, TestWatcher, WebDriverFactory, report_outcome};
use tracing::info;

use crate::cli::SmokeArgs;
use crate::context::CommandContext;

/// One full test cycle: setup, body, job report, teardown.
///
/// Teardown and the job link always run; the body's result decides the exit code.
pub async fn execute(ctx: &CommandContext, args: SmokeArgs) -> Result<()> {
	let mode = ctx.mode()?;
	let config = ctx.config.clone();
	let rest = SauceRest::from_config(&config)?;
	let mut lifecycle = SessionLifecycle::new(
		mode,
		config.clone(),
		ctx.prefix,
		WebDriverFactory::from_config(&config)?,
		rest.clone(),
		ElementWaiter::new(config.element_wait()),
	);

	let mut watcher = TestWatcher::stdout();
	watcher.starting(&args.name)?;

	let outcome = run_body(&mut lifecycle, args.wait_for.as_deref()).await;
	lifecycle.teardown().await;
	report_outcome(&rest, lifecycle.mode(), &lifecycle, outcome.is_ok()).await;
	watcher.finished(&lifecycle)?;

	match &outcome {
		Ok(()) => eprintln!("{}", "passed".green().bold()),
		Err(_) => eprintln!("{}", "failed".red().bold()),
	}
	outcome
}

type Lifecycle = SessionLifecycle<WebDriverFactory, SauceRest, ElementWaiter>;

async fn run_body(lifecycle: &mut Lifecycle, wait_for: Option<&str>) -> Result<()> {
	lifecycle.setup().await?;
	if let Some(selector) = wait_for {
		lifecycle.waiter().wait_css(selector).await?;
		info!(target = "fixture.smoke", selector, "element present");
	}
	Ok(())
}
