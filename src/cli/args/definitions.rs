use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{MalformedArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `prefpanel` binary.
#[derive(Parser, Debug)]
#[command(
	name = "prefpanel",
	version,
	long_version = long_version(),
	about = "Pick an area, cuisines and a price range, then print the restaurant query",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PREFPANEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Read areas and cuisines from a JSON metadata file (default: inline catalog)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the panel heading (default: Restaurant preferences)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "price-low",
		value_name = "AMOUNT",
		allow_negative_numbers = true,
		help = "Lowest selectable price (default: 100)"
	)]
	pub(crate) price_low: Option<i64>,
	#[arg(
		long = "price-high",
		value_name = "AMOUNT",
		allow_negative_numbers = true,
		help = "Highest selectable price (default: 5000)"
	)]
	pub(crate) price_high: Option<i64>,
	#[arg(
		long,
		value_enum,
		help = "How to treat rating or result-count text with no leading number (default: omit)"
	)]
	pub(crate) malformed: Option<MalformedArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the submitted query"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Append log records to this file (default: <data dir>/prefpanel.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
