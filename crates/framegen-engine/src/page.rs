use serde::Serialize;

/// Where a click on the example modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// Anywhere inside the dialog itself
    Body,
}

/// Visibility of the page's sections.
///
/// `modal` holds the type key of the example being shown, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub form_visible: bool,
    pub results_visible: bool,
    pub loading_visible: bool,
    pub modal: Option<String>,
}

impl PageState {
    pub fn show_form(&mut self) {
        self.results_visible = false;
        self.form_visible = true;
    }

    pub fn show_loading(&mut self) {
        self.form_visible = false;
        self.results_visible = false;
        self.loading_visible = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    pub fn show_results(&mut self) {
        self.results_visible = true;
    }

    pub fn open_modal(&mut self, type_key: impl Into<String>) {
        self.modal = Some(type_key.into());
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}
