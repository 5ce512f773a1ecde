mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_cancelled};
use prefpanel::StreamSubmitter;
use prefpanel::logging;
use prefpanel_tui::{PanelOutcome, style};
use settings::ResolvedConfig;
use workflow::PanelWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Err(err) = init_logging(&resolved) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_panel(cli.output, &resolved)
}

fn init_logging(config: &ResolvedConfig) -> Result<()> {
	let file = match &config.log_file {
		Some(path) => path.clone(),
		None => logging::default_log_file()?,
	};
	logging::initialize(&config.log_level, &file)
}

/// Run the panel, then print the submitted query or report cancellation.
fn run_panel(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let mut submitter = StreamSubmitter::stdout(format.into());
	let workflow = PanelWorkflow::from_config(settings)?;

	match workflow.run(&mut submitter)? {
		PanelOutcome::Submitted(_) => Ok(()),
		PanelOutcome::Cancelled => print_cancelled(format),
	}
}
