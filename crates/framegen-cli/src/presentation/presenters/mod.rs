mod catalog;
mod framework;
mod page;

pub use catalog::{present_example_list, present_example_modal, present_type_list, type_icon};
pub use framework::{present_framework, present_generate_result};
pub use page::{present_page, present_toasts};
