use crate::cli::commands::{Context, NO_BIRTHDATE_HINT, open_store};
use crate::cli::parser::Commands;
use crate::core::birthdate::{BirthdateLogic, BirthdateSource};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Birthdate { date, clear } = cmd {
        let pool = open_store(&ctx.cfg)?;

        if *clear {
            if BirthdateLogic::clear(&pool)? {
                success("Stored birthdate removed.");
            } else {
                info("No stored birthdate to remove.");
            }
            return Ok(());
        }

        if let Some(input) = date {
            let saved = BirthdateLogic::set(&pool, &ctx.cfg, input, ctx.reference)?;
            success(format!("Birthdate saved: {}", saved));
            return Ok(());
        }

        match BirthdateLogic::resolve(&pool, &ctx.cfg, ctx.reference)? {
            Some((b, BirthdateSource::Stored)) => println!("Birthdate: {}", b),
            Some((b, BirthdateSource::ConfigDefault)) => {
                println!("Birthdate: {} (default_birthdate from config)", b)
            }
            None => info(NO_BIRTHDATE_HINT),
        }
    }

    Ok(())
}
