use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::settings;
use crate::errors::AppResult;
use crate::models::birthdate::BirthDate;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Where the active birthdate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateSource {
    Stored,
    ConfigDefault,
}

pub struct BirthdateLogic;

impl BirthdateLogic {
    /// Active birthdate: the stored one, else the configured default, else none.
    ///
    /// A stored value that no longer validates (hand-edited database, clock
    /// moved backwards) is reported and ignored rather than rendered.
    pub fn resolve(
        pool: &DbPool,
        cfg: &Config,
        reference: NaiveDate,
    ) -> AppResult<Option<(BirthDate, BirthdateSource)>> {
        if let Some(raw) = settings::load_birthdate(pool)? {
            match BirthDate::parse(&raw, reference) {
                Ok(b) => return Ok(Some((b, BirthdateSource::Stored))),
                Err(e) => warning(format!("Ignoring stored birthdate '{}': {}", raw, e)),
            }
        }

        if let Some(raw) = cfg.default_birthdate.as_deref() {
            match BirthDate::parse(raw, reference) {
                Ok(b) => return Ok(Some((b, BirthdateSource::ConfigDefault))),
                Err(e) => warning(format!("Ignoring default_birthdate '{}': {}", raw, e)),
            }
        }

        Ok(None)
    }

    /// Validate and persist a new birthdate. On error nothing is written.
    pub fn set(
        pool: &DbPool,
        cfg: &Config,
        input: &str,
        reference: NaiveDate,
    ) -> AppResult<BirthDate> {
        let birthdate = BirthDate::parse(input, reference)?;

        if !birthdate.check_within_horizon(cfg.lifespan_years, reference) {
            warning(format!(
                "{} is more than {} years ago: the whole grid will be filled",
                birthdate, cfg.lifespan_years
            ));
        }

        let previous = settings::load_birthdate(pool)?;
        settings::save_birthdate(pool, &birthdate)?;

        let message = match previous {
            Some(p) if p != birthdate.to_storage() => {
                format!("Changed from {} to {}", p, birthdate)
            }
            Some(_) => format!("Unchanged ({})", birthdate),
            None => format!("Set to {}", birthdate),
        };
        ttlog_quiet(&pool.conn, "birthdate", &birthdate.to_storage(), &message);

        Ok(birthdate)
    }

    /// Remove the stored birthdate. Returns false when none was stored.
    pub fn clear(pool: &DbPool) -> AppResult<bool> {
        let removed = settings::clear_birthdate(pool)?;
        if removed {
            ttlog_quiet(&pool.conn, "birthdate", "", "Cleared stored birthdate");
        }
        Ok(removed)
    }
}
