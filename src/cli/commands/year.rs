use crate::cli::commands::{Context, render_mode};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::view_mode::ViewMode;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Year { stats_only } = cmd {
        render_mode(ctx, ViewMode::Year, *stats_only)?;
    }
    Ok(())
}
