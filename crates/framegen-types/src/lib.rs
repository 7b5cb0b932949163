pub mod catalog;
pub mod error;
pub mod framework;
mod normalize;
pub mod request;

pub use catalog::*;
pub use error::{Error, Result};
pub use framework::*;
pub use request::*;
