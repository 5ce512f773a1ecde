//! Core application state and behavior for the preference panel.
//!
//! The [`App`] type aggregates the catalog, the three widgets, the text
//! inputs and the shell state that routes focus and the single open
//! dropdown. Input handling lives in `actions`, drawing in `render`.

mod actions;
mod render;
mod state;

pub use state::{ActiveDropdown, App, Field, PanelOutcome};
