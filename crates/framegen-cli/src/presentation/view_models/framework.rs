use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::views::{html, text};

#[derive(Debug, Clone, Serialize)]
pub struct FrameworkViewModel {
    pub name: String,
    pub type_key: String,
    pub type_name: String,
    pub description: String,
    pub elements: Vec<ElementViewModel>,
    pub when_to_use: String,
    pub best_practices: Vec<String>,
    pub pitfalls: Vec<String>,
    pub psychology_principle: String,
    pub visual_concept: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementViewModel {
    /// 1-based position
    pub number: usize,
    pub name: String,
    pub description: String,
    pub activities: Vec<String>,
    pub success_criteria: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedFileViewModel {
    pub filename: String,
    pub path: String,
    pub mime: String,
    pub bytes: usize,
}

/// Outcome of `framegen generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResultViewModel {
    pub framework: FrameworkViewModel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exported: Vec<ExportedFileViewModel>,
}

impl CreateView for FrameworkViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::FrameworkView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::FrameworkHtml::new(self))
    }
}

impl CreateView for GenerateResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(text::GenerateResultView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(html::FrameworkHtml::new(&self.framework))
    }
}
