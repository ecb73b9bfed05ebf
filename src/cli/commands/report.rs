use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let month = resolve_month(month)?;
        let pool = DbPool::new(&cfg.database)?;
        ReportLogic::generate(&pool, cfg, month, *format, file.as_deref(), *force)?;
    }

    Ok(())
}
