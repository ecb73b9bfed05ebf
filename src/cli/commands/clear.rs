use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::MonthSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::month_key::MonthKey;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { date, field } = cmd {
        let d = resolve_date(date)?;

        let pool = DbPool::new(&cfg.database)?;
        let mut session = MonthSession::open(&pool, MonthKey::of(d), cfg)?;

        if session.day(d).and_then(|day| day.get(*field)).is_none() {
            info(format!("{} {} is not recorded, nothing to clear.", d, field.label()));
            return Ok(());
        }

        session.open_picker(d, *field)?;
        session.confirm(&pool, None)?;

        success(format!("{} {} cleared", d, field.label()));
    }

    Ok(())
}
