use crate::cli::commands::{Context, build_view, load_state, open_store};
use crate::cli::parser::Commands;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        view,
        format,
        file,
        force,
    } = cmd
    {
        let mode = view.unwrap_or(ctx.cfg.default_view);
        let state = load_state(ctx, mode)?;
        let grid = build_view(ctx, &state)?;

        let doc = ExportLogic::export(&grid, ctx.reference, *format, file, *force)?;

        let pool = open_store(&ctx.cfg)?;
        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} view, {} cells → {}", mode, doc.cells.len(), file),
        );
    }
    Ok(())
}
