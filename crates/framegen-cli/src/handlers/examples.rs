use anyhow::{Context, Result};
use framegen_engine::UiEvent;

use super::context::ExecutionContext;
use crate::presentation::presenters::{present_example_list, present_example_modal};
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};

pub async fn handle(ctx: &ExecutionContext, show: Option<String>) -> Result<()> {
    let mut controller = ctx.controller()?;
    super::start(&mut controller).await?;

    let Some(key) = show else {
        let view_model = present_example_list(controller.session().examples());
        let mut result = CommandResultViewModel::new(view_model);
        if result.content.examples.is_empty() {
            result = result.with_badge(StatusBadge::warning("No examples loaded"));
        } else {
            result = result.with_suggestion(
                Guidance::new("See the full structure of one example")
                    .with_command("framegen examples --show <TYPE>"),
            );
        }
        return ctx.renderer().render(result);
    };

    super::dispatch(&mut controller, UiEvent::OpenExample(key)).await?;

    let session = controller.session();
    let view_model = controller
        .page()
        .modal
        .as_deref()
        .and_then(|key| present_example_modal(key, session.examples(), session.types()))
        .context("Example dialog did not open")?;

    ctx.renderer().render(CommandResultViewModel::new(view_model))
}
