use std::path::Path;

use clap::{CommandFactory, FromArgMatches};

use super::tinted_cli_command;
use super::options::MalformedArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_supports_custom_styles() {
	let command = tinted_cli_command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn defaults_leave_overrides_unset() {
	let parsed = parse(&["prefpanel"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.catalog.is_none());
	assert!(parsed.price_low.is_none());
	assert!(parsed.malformed.is_none());
	assert!(!parsed.print_config);
}

#[test]
fn panel_overrides_parse() {
	let parsed = parse(&[
		"prefpanel",
		"--catalog",
		"areas.json",
		"--title",
		"Dinner",
		"--price-low",
		"0",
		"--price-high",
		"2000",
		"--malformed",
		"reject",
		"-o",
		"json",
		"-c",
		"one.toml",
		"-c",
		"two.toml",
	]);
	assert_eq!(parsed.catalog.as_deref(), Some(Path::new("areas.json")));
	assert_eq!(parsed.title.as_deref(), Some("Dinner"));
	assert_eq!((parsed.price_low, parsed.price_high), (Some(0), Some(2000)));
	assert_eq!(parsed.malformed, Some(MalformedArg::Reject));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn unknown_policy_is_rejected() {
	let result = CliArgs::command().try_get_matches_from(["prefpanel", "--malformed", "strict"]);
	assert!(result.is_err());
}
