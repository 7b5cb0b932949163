use std::fmt;

pub mod catalog;
pub mod common;
pub mod framework;
pub mod page;
pub mod result;

pub use catalog::*;
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use framework::*;
pub use page::*;
pub use result::CommandResultViewModel;

/// Bridge from a view model to its views.
pub trait CreateView {
    /// Terminal layout.
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;

    /// Markup as the page would show it.
    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
