//! Host-side pieces of the `prefpanel` binary: directories, logging, the
//! catalog providers and the query submitter.
//!
//! The panel itself lives in `prefpanel-tui`; widget state and query assembly
//! live in `prefpanel-core`.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod submit;

pub use catalog::{InlineCatalog, JsonFileCatalog};
pub use submit::{QueryFormat, StreamSubmitter, format_json, format_plain, format_query};
