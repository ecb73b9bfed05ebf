use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::day_extra;
use crate::core::session::MonthSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::month_key::MonthKey;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_optional_time;

/// Record one time slot of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { date, field, time } = cmd {
        let d = resolve_date(date)?;
        let value = match parse_optional_time(time.as_ref())? {
            Some(t) => t,
            None => TimeOfDay::from(chrono::Local::now().time()),
        };

        let pool = DbPool::new(&cfg.database)?;
        let mut session = MonthSession::open(&pool, MonthKey::of(d), cfg)?;

        session.open_picker(d, *field)?;
        session.confirm(&pool, Some(value))?;

        success(format!("{} {} set to {}", d, field.label(), value));

        if let Some(day) = session.day(d) {
            let extra = day_extra(day, session.standard_minutes())?;
            info(format!("Extra hours for {}: {}", day.date_str(), extra));
        }
    }

    Ok(())
}
