use anyhow::Result;
use serde_json::json;

use super::OutputFormat;

/// Text reported when the panel is closed without submitting.
pub(crate) fn format_cancelled(format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok("Cancelled".to_string()),
		OutputFormat::Json => Ok(serde_json::to_string(&json!({ "cancelled": true }))?),
	}
}

pub(crate) fn print_cancelled(format: OutputFormat) -> Result<()> {
	println!("{}", format_cancelled(format)?);
	Ok(())
}
