use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::views::{html, text};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TypeListViewModel {
    pub types: Vec<TypeCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeCardViewModel {
    pub key: String,
    pub name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub ideal_steps: String,
    pub icon: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleListViewModel {
    pub examples: Vec<ExampleCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleCardViewModel {
    pub key: String,
    pub name: String,
    pub elements: Vec<String>,
}

/// Content of the example dialog.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleModalViewModel {
    pub key: String,
    pub name: String,
    pub type_name: String,
    pub type_description: String,
    pub elements: Vec<String>,
    pub characteristics: Vec<String>,
    pub ideal_steps: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for TypeListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::TypeListView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::TypeCardsHtml::new(&self.types))
    }
}

impl CreateView for ExampleListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::ExampleListView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::ExampleCardsHtml::new(&self.examples))
    }
}

impl CreateView for ExampleModalViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::ExampleModalView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::ExampleModalHtml::new(self))
    }
}
