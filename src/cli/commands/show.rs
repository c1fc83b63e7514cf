use crate::cli::commands::{Context, render_mode};
use crate::cli::parser::Commands;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Show { view, stats_only } = cmd {
        let mode = view.unwrap_or(ctx.cfg.default_view);
        render_mode(ctx, mode, *stats_only)?;
    }
    Ok(())
}
