use crate::cli::commands::{Context, open_store};
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_store(&ctx.cfg)?;
        LogLogic::print_log(&pool, ctx.render.color)?;
    }

    Ok(())
}
