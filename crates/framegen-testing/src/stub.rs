//! In-process transport with canned replies.

use async_trait::async_trait;
use framegen_client::{EXAMPLES_PATH, Error, FRAMEWORK_TYPES_PATH, HttpResponse, Result, Transport};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::fixtures;

#[derive(Debug, Clone)]
pub enum StubReply {
    Respond(HttpResponse),
    /// Simulate a request that never got a response.
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// `Transport` that answers from a route table and records every call.
///
/// Unrouted paths answer 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, StubReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the reference type and example catalogs.
    pub fn with_reference_catalogs(self) -> Self {
        self.on_get(FRAMEWORK_TYPES_PATH, HttpResponse::ok(fixtures::FRAMEWORK_TYPES_JSON))
            .on_get(EXAMPLES_PATH, HttpResponse::ok(fixtures::EXAMPLES_JSON))
    }

    pub fn on_get(self, path: &str, response: HttpResponse) -> Self {
        self.set("GET", path, StubReply::Respond(response));
        self
    }

    pub fn on_post(self, path: &str, response: HttpResponse) -> Self {
        self.set("POST", path, StubReply::Respond(response));
        self
    }

    /// Replace the reply for a route after construction.
    pub fn set(&self, method: &str, path: &str, reply: StubReply) {
        self.routes
            .lock()
            .unwrap()
            .insert(route_key(method, path), reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.path == path)
            .count()
    }

    fn reply(&self, method: &'static str, path: &str, body: Option<Value>) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });

        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&route_key(method, path))
            .cloned();

        match reply {
            Some(StubReply::Respond(response)) => Ok(response),
            Some(StubReply::Unreachable(message)) => Err(Error::transport(path, message)),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}

fn route_key(method: &str, path: &str) -> String {
    format!("{} {}", method, path)
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse> {
        self.reply("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse> {
        self.reply("POST", path, Some(body.clone()))
    }
}
