pub mod html;

pub use html::{escape, list_items};
