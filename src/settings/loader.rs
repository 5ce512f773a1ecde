use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use tempfile::NamedTempFile;

	use super::*;
	use crate::settings::CatalogSource;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	fn cli_with(file: &NamedTempFile, extra: &[&str]) -> CliArgs {
		let path = file.path().to_string_lossy().into_owned();
		let mut args = vec!["prefpanel", "--no-config", "--config", path.as_str()];
		args.extend_from_slice(extra);
		CliArgs::parse_from(args)
	}

	#[test]
	fn config_file_values_are_resolved() {
		let file = config_file(
			r#"
			[catalog]
			areas = ["BTM", "Indiranagar"]
			cuisines = ["Thai"]

			[price]
			low = 200
			high = 3000
			step = 50
			currency = "$"

			[query]
			malformed = "reject"

			[ui]
			title = "Dinner"
			theme = "light"
			"#,
		);
		let resolved = load(&cli_with(&file, &[])).expect("load");

		assert_eq!(
			resolved.catalog,
			CatalogSource::Inline {
				areas: vec!["BTM".into(), "Indiranagar".into()],
				cuisines: vec!["Thai".into()],
			}
		);
		assert_eq!((resolved.price_low, resolved.price_high), (200, 3000));
		assert_eq!(resolved.price_step, 50);
		assert_eq!(resolved.currency, "$");
		assert_eq!(resolved.malformed, "reject");
		assert_eq!(resolved.title, "Dinner");
		assert_eq!(resolved.theme, "light");
	}

	#[test]
	fn cli_flags_win_over_config_files() {
		let file = config_file("[ui]\ntitle = \"From file\"\n[price]\nhigh = 3000\n");
		let resolved = load(&cli_with(
			&file,
			&["--title", "From flag", "--price-high", "4000", "--catalog", "meta.json"],
		))
		.expect("load");

		assert_eq!(resolved.title, "From flag");
		assert_eq!(resolved.price_high, 4000);
		assert_eq!(resolved.catalog, CatalogSource::File("meta.json".into()));
	}

	#[test]
	fn invalid_values_name_their_origin() {
		let file = config_file("[price]\nlow = 900\nhigh = 800\n");
		let err = load(&cli_with(&file, &[])).expect_err("empty price range");
		let message = err.to_string();
		assert!(message.contains("price.low"), "{message}");
		assert!(message.contains("configuration key"), "{message}");

		let resolved = load(&cli_with(&file, &["--price-low", "100"])).expect("flag fixes the range");
		assert_eq!((resolved.price_low, resolved.price_high), (100, 800));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["prefpanel", "--no-config", "--config", path.as_str()]);
		assert!(load(&cli).is_err());
	}
}
