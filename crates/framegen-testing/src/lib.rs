//! Testing infrastructure for framegen.
//!
//! - `StubTransport`: in-process `Transport` with canned replies and a call log
//! - `StubServer`: real HTTP server on a loopback port for CLI tests
//! - `fixtures`: the reference catalogs and sample generated frameworks
//! - `assertions`: checks shared by export and page tests
//! - `TestWorld`: isolated temp environment for running the CLI

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod stub;
pub mod world;

pub use server::StubServer;
pub use stub::{RecordedCall, StubReply, StubTransport};
pub use world::{CliResult, TestWorld};
