use crate::cli::commands::{Context, build_view, open_store, print_view, render_mode};
use crate::cli::parser::Commands;
use crate::core::birthdate::BirthdateLogic;
use crate::errors::AppResult;
use crate::models::birthdate::BirthDate;
use crate::models::view_mode::ViewMode;
use crate::models::view_state::ViewState;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Life {
        birthdate,
        stats_only,
    } = cmd
    {
        let Some(input) = birthdate else {
            return render_mode(ctx, ViewMode::Life, *stats_only);
        };

        // the grid must compute before the new value replaces the stored one
        let candidate = BirthDate::parse(input, ctx.reference)?;
        let view = build_view(ctx, &ViewState::new(ViewMode::Life, Some(candidate)))?;

        let pool = open_store(&ctx.cfg)?;
        BirthdateLogic::set(&pool, &ctx.cfg, input, ctx.reference)?;

        print_view(&view, ctx, *stats_only);
    }

    Ok(())
}
