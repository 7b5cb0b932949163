pub mod context;
pub mod downloads;
pub mod examples;
pub mod generate;
pub mod types;

use anyhow::Result;
use framegen_engine::{Controller, UiEvent};

/// Load the catalogs; fails when the type catalog could not be loaded.
pub(crate) async fn start(controller: &mut Controller) -> Result<()> {
    let started = controller.start().await;
    surface(controller, started)
}

/// Dispatch one event; a failure carries the message the page would show.
pub(crate) async fn dispatch(controller: &mut Controller, event: UiEvent) -> Result<()> {
    let outcome = controller.dispatch(event).await;
    surface(controller, outcome)
}

fn surface(controller: &Controller, outcome: framegen_engine::Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(err) => {
            let message = controller
                .notifications()
                .current_error()
                .map(|toast| toast.message.clone())
                .unwrap_or_else(|| err.to_string());
            Err(anyhow::Error::new(err).context(message))
        }
    }
}
