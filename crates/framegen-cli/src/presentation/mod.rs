//! # Presentation Layer
//!
//! MVVM, one direction only:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (drives the       (pure fn)         (Serialize)      (Driver)   ==(Text)==> View (Display)
//!   Controller)                                                    ==(HTML)==> HtmlView (Display)
//! ```
//!
//! ## Rules
//!
//! * **view_models/**: plain data, `Serialize`, no logic. JSON output is the
//!   complete view model.
//! * **presenters/**: pure functions from engine state (`Session`, `PageState`,
//!   `Notifications`) to view models. Icon lookup and numbering live here.
//! * **views/**: layout only. `text.rs` for the terminal, `html.rs` for the
//!   page fragments the browser used to build.
//! * **renderers/**: picks the view for the requested `--format` and prints it.
//! * **formatters/**: small string helpers used by views (escaping).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, common::OutputFormat,
};
