//! Interactive terminal front-end for the preference panel.
//!
//! Owns everything the core leaves out: focus, the single open dropdown,
//! text inputs, mouse hit-testing, rendering and the event loop. Widget state
//! and query assembly live in `prefpanel-core`.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{ActiveDropdown, App, Field, PanelOutcome};
pub use config::{PanelConfig, PanelLabels};
pub use runtime::run;

pub use crate::input::FieldInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
