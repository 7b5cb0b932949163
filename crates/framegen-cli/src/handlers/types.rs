use anyhow::Result;

use super::context::ExecutionContext;
use crate::presentation::presenters::present_type_list;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer};

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut controller = ctx.controller()?;
    super::start(&mut controller).await?;

    let session = controller.session();
    let view_model = present_type_list(session.types(), session.selected_type());

    let result = CommandResultViewModel::new(view_model).with_suggestion(
        Guidance::new("Generate a framework").with_command(
            "framegen generate --type <TYPE> --industry <..> --purpose <..> --audience <..>",
        ),
    );
    ctx.renderer().render(result)
}
