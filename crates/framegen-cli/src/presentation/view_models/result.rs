use serde::Serialize;

use super::common::{Guidance, StatusBadge};
use super::page::ToastViewModel;

/// Envelope every command renders: a headline badge, the command's own
/// content, the toasts the page still shows, and next-step tips.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toasts: Vec<ToastViewModel>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            toasts: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_toasts(mut self, toasts: Vec<ToastViewModel>) -> Self {
        self.toasts = toasts;
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    /// Toasts not already shown as the badge.
    pub fn extra_toasts(&self) -> impl Iterator<Item = &ToastViewModel> {
        let headline = self.badge.as_ref().map(|b| b.label.as_str());
        self.toasts
            .iter()
            .filter(move |t| Some(t.message.as_str()) != headline)
    }
}
