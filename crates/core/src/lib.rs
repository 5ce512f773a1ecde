//! Filter-selection core for the `prefpanel` preference panel.
//!
//! Everything in this crate is plain state plus total transition functions:
//! the widgets never touch a terminal, a file or the network. A shell (see
//! `prefpanel-tui`) feeds user events into the transitions, paints the
//! resulting state, and hands the assembled [`QueryObject`] to a
//! [`QuerySubmitter`].

pub mod catalog;
pub mod collaborators;
pub mod error;
pub mod filter;
pub mod list;
pub mod multi;
pub mod navigation;
pub mod query;
pub mod range;
pub mod rating;
pub mod single;

pub use catalog::OptionCatalog;
pub use collaborators::{CatalogProvider, QuerySubmitter};
pub use error::{CatalogError, QueryError, RangeError};
pub use filter::filter_options;
pub use list::ListQuery;
pub use multi::MultiSelect;
pub use navigation::Cursor;
pub use query::{
	MAX_RESULTS_CEILING, MAX_RESULTS_FLOOR, MalformedInput, QueryObject, RequestAssembler,
	build_query,
};
pub use range::{DualRange, FillProjection, Handle, RangeBounds};
pub use rating::{RATING_CEILING, RATING_FLOOR, RATING_STEP, decrement_rating, increment_rating};
pub use single::SingleSelect;
