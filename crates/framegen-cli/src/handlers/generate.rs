use anyhow::{Context, Result};
use framegen_engine::UiEvent;
use framegen_engine::controller::GENERATED;
use framegen_types::FormInput;
use tracing::debug;

use super::context::ExecutionContext;
use super::downloads;
use crate::args::GenerateArgs;
use crate::presentation::presenters::{
    present_framework, present_generate_result, present_page, present_toasts,
};
use crate::presentation::{CommandResultViewModel, CreateView, Renderer, StatusBadge};

/// One page session: select, wait for the form, submit, optionally export.
///
/// Queued downloads and the `--html` page are written even when generation
/// fails, so the page snapshot shows the error toast.
pub async fn handle(ctx: &ExecutionContext, args: GenerateArgs) -> Result<()> {
    let mut controller = ctx.controller()?;
    super::start(&mut controller).await?;

    super::dispatch(&mut controller, UiEvent::SelectType(args.framework_type.clone())).await?;
    controller.settle().await;

    let form = FormInput {
        industry: args.industry,
        purpose: args.purpose,
        target_audience: args.audience,
        complexity: args.complexity,
    };
    let mut outcome = super::dispatch(&mut controller, UiEvent::Submit(form)).await;

    if outcome.is_ok() && args.export {
        outcome = super::dispatch(&mut controller, UiEvent::Export).await;
        controller.settle().await;
    }

    let exported = downloads::write_all(ctx.output_dir(), controller.take_downloads())?;

    if let Some(path) = &args.html {
        let page = present_page(&controller);
        std::fs::write(path, page.create_html().to_string())
            .with_context(|| format!("Failed to write page to {}", path.display()))?;
        debug!(path = %path.display(), "page snapshot written");
    }

    outcome?;

    let (framework, type_info) = controller
        .session()
        .current_with_type()
        .context("No framework after a successful generation")?;
    let view_model = present_generate_result(present_framework(framework, type_info), exported);

    let result = CommandResultViewModel::new(view_model)
        .with_badge(StatusBadge::success(GENERATED))
        .with_toasts(present_toasts(controller.notifications()));
    ctx.renderer().render(result)
}
