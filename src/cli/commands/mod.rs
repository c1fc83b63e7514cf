pub mod birthdate;
pub mod cell;
pub mod config;
pub mod export;
pub mod init;
pub mod life;
pub mod log;
pub mod show;
pub mod year;

use crate::config::Config;
use crate::core::birthdate::BirthdateLogic;
use crate::core::logic::{Core, GridView};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::view_mode::ViewMode;
use crate::models::view_state::ViewState;
use crate::ui::grid::{
    RenderOptions, render_life_grid, render_life_stats, render_year_grid, render_year_stats,
};
use crate::ui::messages::header;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Everything a command handler needs besides its own arguments.
pub struct Context {
    pub cfg: Config,
    pub reference: NaiveDate,
    pub render: RenderOptions,
}

pub const NO_BIRTHDATE_HINT: &str =
    "No birthdate configured. Set one with `lifegrid birthdate YYYY-MM-DD`.";

/// Open the preference database, creating its directory when needed.
pub fn open_store(cfg: &Config) -> AppResult<DbPool> {
    if let Some(dir) = Path::new(&cfg.database).parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    DbPool::open_ready(&cfg.database)
}

/// Build the view state for `mode`. Only the life view reads the store.
pub fn load_state(ctx: &Context, mode: ViewMode) -> AppResult<ViewState> {
    match mode {
        ViewMode::Year => Ok(ViewState::new(mode, None)),
        ViewMode::Life => {
            let pool = open_store(&ctx.cfg)?;
            let birthdate = BirthdateLogic::resolve(&pool, &ctx.cfg, ctx.reference)?;
            Ok(ViewState::new(mode, birthdate.map(|(b, _)| b)))
        }
    }
}

/// Compute the view; a life view without birthdate is an input error.
pub fn build_view(ctx: &Context, state: &ViewState) -> AppResult<GridView> {
    if state.mode == ViewMode::Life && state.birthdate.is_none() {
        return Err(AppError::InvalidInput(NO_BIRTHDATE_HINT.into()));
    }
    Core::build_view(state, ctx.reference, ctx.cfg.horizon())
}

pub fn print_view(view: &GridView, ctx: &Context, stats_only: bool) {
    match view {
        GridView::Life(grid) => {
            header(format!(
                "Your life in weeks ({} years × {} weeks)",
                grid.horizon.lifespan_years, grid.horizon.weeks_per_year
            ));
            if !stats_only {
                println!("{}", render_life_grid(grid, &ctx.render));
            }
            print!("{}", render_life_stats(grid));
        }
        GridView::Year(grid) => {
            header(format!("{} in days", grid.year));
            if !stats_only {
                println!("{}", render_year_grid(grid, &ctx.render));
            }
            print!("{}", render_year_stats(grid));
        }
    }
}

/// Render `mode`, showing the "no birthdate" state instead of failing.
pub fn render_mode(ctx: &Context, mode: ViewMode, stats_only: bool) -> AppResult<()> {
    let state = load_state(ctx, mode)?;
    if state.mode == ViewMode::Life && state.birthdate.is_none() {
        crate::ui::messages::info(NO_BIRTHDATE_HINT);
        return Ok(());
    }

    let view = build_view(ctx, &state)?;
    print_view(&view, ctx, stats_only);
    Ok(())
}
