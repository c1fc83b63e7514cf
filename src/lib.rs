//! lifegrid library root.
//! Exposes the CLI parser, the high-level run() function, the pure grid
//! calculator and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Context};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::grid::{Glyphs, RenderOptions};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, &ctx.cfg),
        Commands::Birthdate { .. } => commands::birthdate::handle(&cli.command, ctx),
        Commands::Life { .. } => commands::life::handle(&cli.command, ctx),
        Commands::Year { .. } => commands::year::handle(&cli.command, ctx),
        Commands::Show { .. } => commands::show::handle(&cli.command, ctx),
        Commands::Cell { .. } => commands::cell::handle(&cli.command, ctx),
        Commands::Export { .. } => commands::export::handle(&cli.command, ctx),
        Commands::Log { .. } => commands::log::handle(&cli.command, ctx),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn build_context(cli: &Cli, mut cfg: Config) -> AppResult<Context> {
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(years) = cli.lifespan {
        cfg.lifespan_years = years;
    }
    if let Some(weeks) = cli.weeks_per_year {
        cfg.weeks_per_year = weeks;
    }

    let reference = utils::date::resolve_reference(cli.today.as_deref())?;

    let render = RenderOptions {
        color: cfg.color && !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
        glyphs: if cli.ascii {
            Glyphs::ASCII
        } else {
            Glyphs::BLOCKS
        },
    };

    Ok(Context {
        cfg,
        reference,
        render,
    })
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI
    let cli = Cli::parse();

    // load config once
    let cfg = Config::load()?;

    let ctx = build_context(&cli, cfg)?;
    dispatch(&cli, &ctx)
}
