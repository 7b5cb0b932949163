use framegen_engine::ToastLevel;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ExampleListViewModel, ExampleModalViewModel, FrameworkViewModel, TypeListViewModel};
use crate::presentation::views::{html, text};

#[derive(Debug, Clone, Serialize)]
pub struct ToastViewModel {
    pub level: ToastLevel,
    pub message: String,
}

/// Snapshot of the whole page.
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub types: TypeListViewModel,
    pub examples: ExampleListViewModel,
    pub selected_type: Option<String>,
    pub form_visible: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub framework: Option<FrameworkViewModel>,
    pub modal: Option<ExampleModalViewModel>,
    pub toasts: Vec<ToastViewModel>,
}

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::PageView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::PageHtml::new(self))
    }
}
