mod definitions;
mod options;
mod styles;

use clap::{Command, CommandFactory, FromArgMatches};

pub(crate) use definitions::CliArgs;
pub(crate) use options::OutputFormat;

use super::annotations::dim_cli_annotations;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// The clap command with muted help annotations.
fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[cfg(test)]
mod tests;
