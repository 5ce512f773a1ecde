use clap::ValueEnum;
use prefpanel::QueryFormat;

/// Malformed-input policies accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MalformedArg {
	Omit,
	Reject,
}

impl MalformedArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			MalformedArg::Omit => "omit",
			MalformedArg::Reject => "reject",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

impl From<OutputFormat> for QueryFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Plain => QueryFormat::Plain,
			OutputFormat::Json => QueryFormat::Json,
		}
	}
}
