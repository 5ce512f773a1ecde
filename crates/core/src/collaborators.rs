//! Seams to the collaborators that live outside the core.
//!
//! Fetching the catalog and delivering the finished query are I/O concerns
//! owned by the embedding application; the core only depends on these traits.

use anyhow::Result;

use crate::catalog::OptionCatalog;
use crate::query::QueryObject;

/// Supplies the option catalog once, before the widgets become usable.
pub trait CatalogProvider {
	/// Load a catalog snapshot.
	fn load(&self) -> Result<OptionCatalog>;

	/// Short human readable description used in logs.
	fn describe(&self) -> String;
}

/// Receives the assembled query when the user submits the panel.
pub trait QuerySubmitter {
	fn submit(&mut self, query: &QueryObject) -> Result<()>;
}

impl<T: QuerySubmitter + ?Sized> QuerySubmitter for &mut T {
	fn submit(&mut self, query: &QueryObject) -> Result<()> {
		(**self).submit(query)
	}
}
