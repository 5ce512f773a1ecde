//! Muted rendering for the metadata clap appends to argument help.

use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

const DEFAULT_MARKER: &str = "(default:";

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn push_muted(target: &mut StyledStr, text: &str) {
	let style = muted();
	let _ = std::fmt::write(target, format_args!("{style}{text}{style:#}"));
}

/// Help text with an inline `(default: ...)` note muted.
fn styled_help(text: &str) -> StyledStr {
	let mut styled = StyledStr::new();
	let Some(start) = text.find(DEFAULT_MARKER) else {
		styled.push_str(text);
		return styled;
	};
	let end = text[start..]
		.find(')')
		.map_or(text.len(), |offset| start + offset + 1);
	styled.push_str(&text[..start]);
	push_muted(&mut styled, &text[start..end]);
	styled.push_str(&text[end..]);
	styled
}

fn quote_if_spaced(value: &str) -> String {
	if value.chars().any(char::is_whitespace) {
		format!("{value:?}")
	} else {
		value.to_string()
	}
}

fn possible_values_note(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| quote_if_spaced(value.get_name()))
		.collect();
	(!visible.is_empty()).then(|| format!("[possible values: {}]", visible.join(", ")))
}

fn default_value_note(arg: &Arg) -> Option<String> {
	let rendered: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy())
		.filter(|value| !value.trim().is_empty())
		.map(|value| quote_if_spaced(&value))
		.collect();
	(!rendered.is_empty()).then(|| format!("(default: {})", rendered.join(", ")))
}

fn env_note(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	(!name.trim().is_empty()).then(|| format!("[env: {name}=]"))
}

/// Re-render an argument's help with possible values, default and env
/// annotations muted. Clap's own rendering of those notes is switched off.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	let mut styled = styled_help(&help);
	let mut notes = Vec::new();

	if let Some(note) = possible_values_note(&arg) {
		arg = arg.hide_possible_values(true);
		notes.push(note);
	}
	if !help.contains(DEFAULT_MARKER)
		&& let Some(note) = default_value_note(&arg)
	{
		arg = arg.hide_default_value(true);
		notes.push(note);
	}
	if let Some(note) = env_note(&arg) {
		arg = arg.hide_env(true);
		notes.push(note);
	}

	let mut has_text = !help.is_empty();
	if !has_text && notes.is_empty() {
		return arg;
	}
	for note in notes {
		if has_text {
			styled.push_str(" ");
		}
		push_muted(&mut styled, &note);
		has_text = true;
	}
	arg.help(styled)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn styled_help_keeps_the_text() {
		let text = "Pick a theme (default: slate) by name";
		assert_eq!(styled_help(text).to_string(), text);
	}

	#[test]
	fn possible_values_are_listed_and_quoted() {
		let arg = Arg::new("policy").value_parser(["omit", "drop all"]);
		assert_eq!(
			possible_values_note(&arg).as_deref(),
			Some("[possible values: omit, \"drop all\"]")
		);
	}

	#[test]
	fn blank_defaults_are_skipped() {
		let arg = Arg::new("output").default_values(["plain", " "]);
		assert_eq!(default_value_note(&arg).as_deref(), Some("(default: plain)"));
	}

	#[test]
	fn env_note_names_the_variable() {
		let arg = Arg::new("config").env("PREFPANEL_CONFIG");
		assert_eq!(env_note(&arg).as_deref(), Some("[env: PREFPANEL_CONFIG=]"));
	}

	#[test]
	fn dimmed_help_appends_notes_after_the_text() {
		let arg = Arg::new("config")
			.help("Extra configuration file")
			.env("PREFPANEL_CONFIG");
		let arg = dim_cli_annotations(arg);
		assert_eq!(
			arg.get_help().map(ToString::to_string).as_deref(),
			Some("Extra configuration file [env: PREFPANEL_CONFIG=]")
		);
	}
}
