//! Client side of the framework generation API.
//!
//! `ApiClient` speaks the three JSON endpoints over any `Transport`;
//! `HttpTransport` is the reqwest-backed production transport.

pub mod api;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{ApiClient, EXAMPLES_PATH, FRAMEWORK_TYPES_PATH, GENERATE_PATH};
pub use config::{ApiConfig, Config, UiConfig};
pub use error::{Error, Result};
pub use transport::{HttpResponse, HttpTransport, Transport};
