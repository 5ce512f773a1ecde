//! Query submitter that writes the assembled query to a stream.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use log::info;
use prefpanel_core::{QueryObject, QuerySubmitter};

/// How a submitted query is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryFormat {
	/// One `key = value` line per emitted key.
	#[default]
	Plain,
	/// The sparse object exactly as it would be sent.
	Json,
}

/// Plain rendering. An unconstrained query prints `(no constraints)`.
pub fn format_plain(query: &QueryObject) -> String {
	let entries = query.entries();
	if entries.is_empty() {
		return "(no constraints)".to_string();
	}
	entries
		.into_iter()
		.map(|(key, value)| format!("{key} = {value}"))
		.collect::<Vec<_>>()
		.join("\n")
}

pub fn format_json(query: &QueryObject) -> Result<String> {
	Ok(serde_json::to_string(query)?)
}

pub fn format_query(query: &QueryObject, format: QueryFormat) -> Result<String> {
	match format {
		QueryFormat::Plain => Ok(format_plain(query)),
		QueryFormat::Json => format_json(query),
	}
}

/// Writes each submitted query to `writer`.
#[derive(Debug)]
pub struct StreamSubmitter<W> {
	writer: W,
	format: QueryFormat,
}

impl<W: Write> StreamSubmitter<W> {
	pub fn new(writer: W, format: QueryFormat) -> Self {
		Self { writer, format }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl StreamSubmitter<Stdout> {
	pub fn stdout(format: QueryFormat) -> Self {
		Self::new(io::stdout(), format)
	}
}

impl<W: Write> QuerySubmitter for StreamSubmitter<W> {
	fn submit(&mut self, query: &QueryObject) -> Result<()> {
		let rendered = format_query(query, self.format)?;
		writeln!(self.writer, "{rendered}")?;
		self.writer.flush()?;
		info!("submitted query with {} key(s)", query.entries().len());
		Ok(())
	}
}
