use super::{CatalogSource, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.catalog {
		CatalogSource::File(path) => lines.push(format!("  Catalog: {}", path.display())),
		CatalogSource::Inline { areas, cuisines } => {
			lines.push(format!("  Areas: {}", list_or_none(areas)));
			lines.push(format!("  Cuisines: {}", list_or_none(cuisines)));
		}
	}
	lines.push(format!(
		"  Price range: {cur}{} to {cur}{} (step {})",
		config.price_low,
		config.price_high,
		config.price_step,
		cur = config.currency
	));
	lines.push(format!("  Malformed input: {}", config.malformed));
	lines.push(format!("  Title: {}", config.title));
	lines.push(format!("  UI theme: {}", config.theme));
	lines.push(format!("  Log level: {}", config.log_level));
	match &config.log_file {
		Some(path) => lines.push(format!("  Log file: {}", path.display())),
		None => lines.push("  Log file: (data directory)".to_string()),
	}
	lines
}

fn list_or_none(values: &[String]) -> String {
	if values.is_empty() {
		"(none)".to_string()
	} else {
		values.join(", ")
	}
}
