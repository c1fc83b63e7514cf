use crate::cli::commands::{Context, build_view, load_state};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::tooltip::describe_cell;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Cell { view, index } = cmd {
        let state = load_state(ctx, *view)?;
        let grid = build_view(ctx, &state)?;

        let desc = describe_cell(&grid, *index).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "cell index {} is out of range (0..{})",
                index,
                grid.cells().len()
            ))
        })?;

        println!("{}", desc);
    }
    Ok(())
}
