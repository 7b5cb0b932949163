//! framegen-engine: the page controller.
//!
//! Owns everything the browser page used to: the loaded catalogs, the
//! selected type, the current framework, section visibility, toasts, delayed
//! actions and pending downloads. Front ends feed it [`UiEvent`]s and render
//! its state.

pub mod controller;
pub mod error;
pub mod events;
pub mod export;
pub mod notify;
pub mod page;
pub mod scheduler;
pub mod session;

pub use controller::Controller;
pub use error::{Error, Result};
pub use events::UiEvent;
pub use export::{Download, TextReport};
pub use notify::{Notifications, Toast, ToastLevel};
pub use page::{ClickTarget, PageState};
pub use session::Session;
