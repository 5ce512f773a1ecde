use anyhow::Result;
use log::{info, warn};
use prefpanel::{InlineCatalog, JsonFileCatalog};
use prefpanel_core::{CatalogProvider, OptionCatalog, QuerySubmitter};
use prefpanel_tui::{PanelConfig, PanelOutcome};

use crate::settings::{CatalogSource, ResolvedConfig};

/// Loads the catalog, runs the panel and hands a submitted query on.
pub(crate) struct PanelWorkflow {
	provider: Box<dyn CatalogProvider>,
	panel: PanelConfig,
}

impl PanelWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		Ok(Self {
			provider: provider_for(&config.catalog),
			panel: config.panel_config()?,
		})
	}

	/// Run until the user submits or quits. A submitted query is passed to
	/// `submitter` before the outcome is returned.
	pub(crate) fn run(self, submitter: &mut dyn QuerySubmitter) -> Result<PanelOutcome> {
		let catalog = load_catalog(self.provider.as_ref());
		let outcome = prefpanel_tui::run(catalog, self.panel)?;
		match &outcome {
			PanelOutcome::Submitted(query) => submitter.submit(query)?,
			PanelOutcome::Cancelled => info!("panel closed without submitting"),
		}
		Ok(outcome)
	}
}

fn provider_for(source: &CatalogSource) -> Box<dyn CatalogProvider> {
	match source {
		CatalogSource::File(path) => Box::new(JsonFileCatalog::new(path)),
		CatalogSource::Inline { areas, cuisines } => {
			Box::new(InlineCatalog::new(areas.clone(), cuisines.clone()))
		}
	}
}

/// A provider failure leaves the panel usable with empty option lists.
fn load_catalog(provider: &dyn CatalogProvider) -> OptionCatalog {
	match provider.load() {
		Ok(catalog) => {
			info!(
				"loaded {}: {} areas, {} cuisines",
				provider.describe(),
				catalog.areas().len(),
				catalog.cuisines().len()
			);
			catalog
		}
		Err(err) => {
			warn!(
				"could not load {}: {err:#}; continuing with an empty catalog",
				provider.describe()
			);
			OptionCatalog::empty()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn inline_source_builds_an_inline_provider() {
		let provider = provider_for(&CatalogSource::Inline {
			areas: vec!["BTM".into()],
			cuisines: vec!["Thai".into()],
		});
		let catalog = load_catalog(provider.as_ref());
		assert_eq!(catalog.areas(), ["BTM"]);
		assert_eq!(catalog.cuisines(), ["Thai"]);
	}

	#[test]
	fn unreadable_catalog_falls_back_to_empty() {
		let dir = tempfile::tempdir().expect("temp dir");
		let provider = provider_for(&CatalogSource::File(dir.path().join("absent.json")));
		assert!(load_catalog(provider.as_ref()).is_empty());
	}
}
