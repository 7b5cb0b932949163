use framegen_engine::{Controller, Notifications};

use super::{present_example_list, present_example_modal, present_framework, present_type_list};
use crate::presentation::view_models::{PageViewModel, ToastViewModel};

/// Visible toasts, error first.
pub fn present_toasts(notifications: &Notifications) -> Vec<ToastViewModel> {
    notifications
        .visible()
        .map(|toast| ToastViewModel {
            level: toast.level,
            message: toast.message.clone(),
        })
        .collect()
}

pub fn present_page(controller: &Controller) -> PageViewModel {
    let session = controller.session();
    let page = controller.page();

    let framework = session
        .current_with_type()
        .map(|(framework, info)| present_framework(framework, info));

    let modal = page
        .modal
        .as_deref()
        .and_then(|key| present_example_modal(key, session.examples(), session.types()));

    PageViewModel {
        types: present_type_list(session.types(), session.selected_type()),
        examples: present_example_list(session.examples()),
        selected_type: session.selected_type().map(str::to_string),
        form_visible: page.form_visible,
        loading_visible: page.loading_visible,
        results_visible: page.results_visible,
        framework,
        modal,
        toasts: present_toasts(controller.notifications()),
    }
}
