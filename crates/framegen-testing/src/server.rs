//! Loopback HTTP server that impersonates the generation backend.
//!
//! CLI tests need a real socket because the binary builds its own
//! `HttpTransport`. The server runs on a private runtime in a background
//! thread and shuts down when dropped.

use anyhow::{Context, Result};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::thread::JoinHandle;
use tokio::sync::oneshot;

use crate::fixtures;

pub struct StubServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Reference catalogs, and a generate endpoint answering with the growth fixture.
    pub fn reference() -> Result<Self> {
        Self::start(200, fixtures::GROWTH_FRAMEWORK_JSON)
    }

    /// Reference catalogs, and a generate endpoint answering with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Result<Self> {
        let generate_status = StatusCode::from_u16(status).context("invalid status code")?;
        let generate_body = body.to_string();

        let router = Router::new()
            .route(
                "/api/framework-types",
                get(|| async { json_reply(StatusCode::OK, fixtures::FRAMEWORK_TYPES_JSON.to_string()) }),
            )
            .route(
                "/api/examples",
                get(|| async { json_reply(StatusCode::OK, fixtures::EXAMPLES_JSON.to_string()) }),
            )
            .route(
                "/api/generate-framework",
                post(move || {
                    let body = generate_body.clone();
                    async move { json_reply(generate_status, body) }
                }),
            );

        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = addr_tx.send(Err(e.to_string()));
                    return;
                }
            };

            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                    Ok(listener) => listener,
                    Err(e) => {
                        let _ = addr_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let _ = addr_tx.send(listener.local_addr().map_err(|e| e.to_string()));

                let _ = axum::serve(listener, router)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        let addr = addr_rx
            .recv()
            .context("stub server thread exited before binding")?
            .map_err(|e| anyhow::anyhow!("stub server failed to start: {}", e))?;

        Ok(Self {
            addr,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

fn json_reply(status: StatusCode, body: String) -> impl IntoResponse {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
