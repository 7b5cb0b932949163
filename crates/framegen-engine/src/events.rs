use framegen_types::FormInput;
use std::time::Instant;

use crate::page::ClickTarget;

/// Everything a user (or the page clock) can do to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A type card was clicked.
    SelectType(String),
    /// The generation form was submitted.
    Submit(FormInput),
    /// "Regenerate": back to the form, keeping the selected type.
    Regenerate,
    /// "Export": download the current framework.
    Export,
    /// An example card was clicked.
    OpenExample(String),
    /// The modal's close button.
    CloseModal,
    ModalClick(ClickTarget),
    /// Clock advanced; fire deferred work and expire toasts.
    Tick(Instant),
}
