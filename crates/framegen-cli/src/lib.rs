// NOTE: framegen CLI layout
//
// The page controller lives in framegen-engine and knows nothing about
// terminals. This crate drives it with scripted UiEvents (one subcommand is
// one user session), then renders the resulting state through the
// presentation layer and writes any queued downloads to disk.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, GenerateArgs, LogLevel, OutputFormat};
pub use commands::run;
