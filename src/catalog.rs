//! Catalog providers backed by a metadata file or by inline configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use prefpanel_core::{CatalogError, CatalogProvider, OptionCatalog};

/// Reads a `{ "areas": [...], "cuisines": [...] }` document from disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
	path: PathBuf,
}

impl JsonFileCatalog {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CatalogProvider for JsonFileCatalog {
	fn load(&self) -> Result<OptionCatalog> {
		let text = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
			path: self.path.clone(),
			source,
		})?;
		Ok(OptionCatalog::from_json(&text)?)
	}

	fn describe(&self) -> String {
		format!("catalog file {}", self.path.display())
	}
}

/// Lists taken straight from `catalog.areas` and `catalog.cuisines`.
#[derive(Debug, Clone, Default)]
pub struct InlineCatalog {
	areas: Vec<String>,
	cuisines: Vec<String>,
}

impl InlineCatalog {
	pub fn new(areas: Vec<String>, cuisines: Vec<String>) -> Self {
		Self { areas, cuisines }
	}
}

impl CatalogProvider for InlineCatalog {
	fn load(&self) -> Result<OptionCatalog> {
		Ok(OptionCatalog::new(
			self.areas.iter().cloned(),
			self.cuisines.iter().cloned(),
		))
	}

	fn describe(&self) -> String {
		format!(
			"inline catalog ({} areas, {} cuisines)",
			self.areas.len(),
			self.cuisines.len()
		)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	fn write_catalog(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().expect("temp file");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	#[test]
	fn file_catalog_decodes_metadata_document() {
		let file = write_catalog(r#"{"areas": ["BTM", "Whitefield"], "cuisines": ["Thai"]}"#);
		let catalog = JsonFileCatalog::new(file.path()).load().expect("load");
		assert_eq!(catalog.areas(), ["BTM", "Whitefield"]);
		assert_eq!(catalog.cuisines(), ["Thai"]);
	}

	#[test]
	fn missing_keys_decode_as_empty_lists() {
		let file = write_catalog(r#"{"areas": ["BTM"]}"#);
		let catalog = JsonFileCatalog::new(file.path()).load().expect("load");
		assert_eq!(catalog.areas(), ["BTM"]);
		assert!(catalog.cuisines().is_empty());
	}

	#[test]
	fn file_catalog_normalises_entries() {
		let file = write_catalog(r#"{"areas": [" BTM ", "", "BTM", "HSR"], "cuisines": []}"#);
		let catalog = JsonFileCatalog::new(file.path()).load().expect("load");
		assert_eq!(catalog.areas(), ["BTM", "HSR"]);
	}

	#[test]
	fn unreadable_file_reports_the_path() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("missing.json");
		let err = JsonFileCatalog::new(&path).load().expect_err("missing file");
		assert!(err.to_string().contains("missing.json"));
	}

	#[test]
	fn malformed_document_is_an_error() {
		let file = write_catalog("{ not json");
		let err = JsonFileCatalog::new(file.path())
			.load()
			.expect_err("invalid json");
		assert!(err.to_string().starts_with("failed to decode catalog"));
	}

	#[test]
	fn inline_catalog_normalises_and_describes() {
		let provider = InlineCatalog::new(
			vec!["Koramangala".into(), "Koramangala".into()],
			vec!["Chinese".into(), " ".into()],
		);
		let catalog = provider.load().expect("load");
		assert_eq!(catalog.areas(), ["Koramangala"]);
		assert_eq!(catalog.cuisines(), ["Chinese"]);
		assert_eq!(provider.describe(), "inline catalog (2 areas, 2 cuisines)");
	}
}
